//! Suggestion generation.
//!
//! Suggestions come from a fixed rule table. Each category rule fires when
//! the answer to its question matches a trigger; for a given question only
//! the first matching rule fires. Global rules depend on the total score.

use tracing::debug;

use crate::{AnswerSet, PointRange, Priority, QuestionId, Suggestion, SuggestionThresholds};

/// A pre-authored suggestion.
struct Template {
    category: &'static str,
    priority: Priority,
    title: &'static str,
    description: &'static str,
    tips: &'static [&'static str],
    impact: &'static str,
    reduction: Option<PointRange>,
}

impl Template {
    fn to_suggestion(&self) -> Suggestion {
        Suggestion {
            category: self.category.to_string(),
            priority: self.priority,
            title: self.title.to_string(),
            description: self.description.to_string(),
            tips: self.tips.iter().map(|tip| tip.to_string()).collect(),
            impact: self.impact.to_string(),
            reduction: self.reduction,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Trigger {
    AtLeast(u32),
    Exactly(u32),
}

impl Trigger {
    fn matches(self, value: u32) -> bool {
        match self {
            Self::AtLeast(min) => value >= min,
            Self::Exactly(expected) => value == expected,
        }
    }
}

struct Rule {
    question: QuestionId,
    trigger: Trigger,
    template: Template,
}

const TRANSPORTATION: &str = "Transportation";
const DIET: &str = "Diet & Food";
const ENERGY: &str = "Energy & Home";

static CATEGORY_RULES: &[Rule] = &[
    Rule {
        question: QuestionId::Transport,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: TRANSPORTATION,
            priority: Priority::High,
            title: "Reduce Vehicle Dependency",
            description: "Your car usage significantly impacts your carbon footprint.",
            tips: &[
                "Switch to public transit when possible",
                "Walk or bike for short distances",
                "Carpool to work or social events",
                "Consider purchasing a hybrid or electric vehicle",
                "Combine multiple errands into one trip",
                "Work from home when possible to reduce commuting",
            ],
            impact: "High - Can reduce footprint by up to 4 points",
            reduction: Some(PointRange::exactly(4)),
        },
    },
    Rule {
        question: QuestionId::Transport,
        trigger: Trigger::Exactly(3),
        template: Template {
            category: TRANSPORTATION,
            priority: Priority::Medium,
            title: "Optimize Your Green Commute",
            description: "You're using an electric car - great! Here's how to do even better.",
            tips: &[
                "Walk or bike when weather and distance permit",
                "Use public transportation for longer trips",
                "Ensure your electricity comes from renewable sources",
                "Encourage others to switch to electric vehicles",
            ],
            impact: "Medium - Can reduce footprint by 1-2 points",
            reduction: Some(PointRange::new(1, 2)),
        },
    },
    Rule {
        question: QuestionId::Transport,
        trigger: Trigger::Exactly(2),
        template: Template {
            category: TRANSPORTATION,
            priority: Priority::Low,
            title: "Perfect Your Sustainable Commute",
            description: "You're already using public transit! Small optimizations can help even more.",
            tips: &[
                "Walk or bike when weather permits",
                "Choose electric or hybrid public transport options",
                "Support local transit improvement initiatives",
                "Help others discover public transportation benefits",
            ],
            impact: "Low - Can reduce footprint by 1 point",
            reduction: Some(PointRange::exactly(1)),
        },
    },
    Rule {
        question: QuestionId::Diet,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: DIET,
            priority: Priority::High,
            title: "Transition to Sustainable Eating",
            description: "Meat-heavy diets have a significant environmental impact.",
            tips: &[
                "Try 'Meatless Monday' - start with one meat-free day per week",
                "Reduce portion sizes of meat in meals",
                "Choose locally-sourced and organic meat when you do eat it",
                "Explore plant-based protein alternatives like beans and lentils",
                "Try fish instead of red meat twice a week",
                "Learn delicious vegetarian recipes",
            ],
            impact: "High - Can reduce footprint by 2-4 points",
            reduction: Some(PointRange::new(2, 4)),
        },
    },
    Rule {
        question: QuestionId::Diet,
        trigger: Trigger::Exactly(3),
        template: Template {
            category: DIET,
            priority: Priority::Medium,
            title: "Move Toward More Plant-Based Eating",
            description: "Your balanced diet is good, but increasing plants can help more.",
            tips: &[
                "Increase vegetable portions in your meals",
                "Try plant-based alternatives 2-3 times per week",
                "Choose fish over red meat when possible",
                "Buy seasonal and local produce when available",
            ],
            impact: "Medium - Can reduce footprint by 1-2 points",
            reduction: Some(PointRange::new(1, 2)),
        },
    },
    Rule {
        question: QuestionId::Energy,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: ENERGY,
            priority: Priority::High,
            title: "Switch to Renewable Energy",
            description: "Fossil fuel energy significantly impacts your carbon footprint.",
            tips: &[
                "Research renewable energy options in your area",
                "Consider installing solar panels if feasible",
                "Switch to a green energy provider",
                "Improve home insulation to reduce energy needs",
                "Upgrade to energy-efficient appliances",
                "Use LED bulbs throughout your home",
            ],
            impact: "High - Can reduce footprint by 2-4 points",
            reduction: Some(PointRange::new(2, 4)),
        },
    },
    Rule {
        question: QuestionId::Energy,
        trigger: Trigger::Exactly(3),
        template: Template {
            category: ENERGY,
            priority: Priority::Medium,
            title: "Increase Your Renewable Energy Use",
            description: "You're using some renewable energy - let's increase that percentage.",
            tips: &[
                "Look into increasing your renewable energy percentage",
                "Use a programmable thermostat",
                "Unplug electronics when not in use",
                "Air-dry clothes instead of using the dryer",
            ],
            impact: "Medium - Can reduce footprint by 1-2 points",
            reduction: Some(PointRange::new(1, 2)),
        },
    },
    Rule {
        question: QuestionId::Shopping,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: "Conscious Shopping",
            priority: Priority::High,
            title: "Embrace Sustainable Shopping",
            description: "Frequent shopping for new items has a major environmental impact.",
            tips: &[
                "Shop at thrift stores and consignment shops",
                "Buy refurbished electronics instead of brand new",
                "Practice the 'do I really need this?' test before purchases",
                "Choose quality items that last longer",
                "Rent or borrow items you use infrequently",
                "Support brands with strong sustainability practices",
            ],
            impact: "High - Can reduce footprint by 2-4 points",
            reduction: Some(PointRange::new(2, 4)),
        },
    },
    Rule {
        question: QuestionId::Waste,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: "Waste Reduction",
            priority: Priority::High,
            title: "Minimize Your Household Waste",
            description: "High waste generation significantly impacts the environment.",
            tips: &[
                "Start composting organic waste",
                "Increase recycling of paper, plastic, and metals",
                "Use reusable bags, containers, and water bottles",
                "Buy products with minimal packaging",
                "Donate or sell items instead of throwing them away",
                "Choose products that can be repaired rather than replaced",
            ],
            impact: "High - Can reduce footprint by 2-4 points",
            reduction: Some(PointRange::new(2, 4)),
        },
    },
    Rule {
        question: QuestionId::Water,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: "Water Conservation",
            priority: Priority::Medium,
            title: "Reduce Your Water Consumption",
            description: "High water usage contributes to your environmental impact.",
            tips: &[
                "Take shorter showers (aim for 5 minutes or less)",
                "Fix leaky faucets and pipes promptly",
                "Use efficient appliances and low-flow fixtures",
                "Collect rainwater for plants",
                "Only run dishwashers and washing machines with full loads",
                "Turn off the tap while brushing teeth",
            ],
            impact: "Medium - Can reduce footprint by 2-4 points",
            reduction: Some(PointRange::new(2, 4)),
        },
    },
    Rule {
        question: QuestionId::Travel,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: "Travel & Transportation",
            priority: Priority::High,
            title: "Reduce Air Travel Impact",
            description: "Frequent flying has one of the highest per-activity carbon impacts.",
            tips: &[
                "Choose destinations closer to home",
                "Take longer, less frequent trips instead of many short ones",
                "Consider train travel for medium-distance trips",
                "Offset your flights through verified carbon offset programs",
                "Choose direct flights when flying is necessary",
                "Explore local destinations and 'staycation' options",
            ],
            impact: "Very High - Can reduce footprint by 2-4 points",
            reduction: Some(PointRange::new(2, 4)),
        },
    },
    Rule {
        question: QuestionId::Habits,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: "Recycling & Reuse",
            priority: Priority::Medium,
            title: "Make Reuse and Recycling a Habit",
            description: "Products that are rarely reused or recycled end up as new emissions.",
            tips: &[
                "Set up clearly labelled recycling bins at home",
                "Repair before replacing",
                "Carry a reusable bag, bottle, and cup",
                "Learn your local recycling rules",
            ],
            impact: "Medium - Can reduce footprint by 1-2 points",
            reduction: Some(PointRange::new(1, 2)),
        },
    },
    Rule {
        question: QuestionId::Appliances,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: ENERGY,
            priority: Priority::Medium,
            title: "Cut Standby Power",
            description: "Appliances left on or on standby draw power all day.",
            tips: &[
                "Use power strips to switch off several devices at once",
                "Turn off lights when leaving a room",
                "Unplug chargers once devices are full",
                "Enable power-saving modes on appliances",
            ],
            impact: "Medium - Can reduce footprint by 1-2 points",
            reduction: Some(PointRange::new(1, 2)),
        },
    },
    Rule {
        question: QuestionId::Digital,
        trigger: Trigger::AtLeast(4),
        template: Template {
            category: "Digital Habits",
            priority: Priority::Low,
            title: "Lighten Your Digital Footprint",
            description: "Long screen time adds up in device energy and data-center load.",
            tips: &[
                "Stream at lower resolution when HD is not needed",
                "Clean up cloud storage and old emails",
                "Keep devices longer before upgrading",
                "Set daily screen-time goals",
            ],
            impact: "Low - Can reduce footprint by 1 point",
            reduction: Some(PointRange::exactly(1)),
        },
    },
];

static GETTING_STARTED: Template = Template {
    category: "Getting Started",
    priority: Priority::High,
    title: "Begin Your Sustainability Journey",
    description: "Your score indicates high environmental impact, but every step toward \
                  sustainability makes a difference!",
    tips: &[
        "Focus on 1-2 biggest impact areas first",
        "Set small, achievable weekly goals",
        "Track your progress and celebrate improvements",
        "Connect with others on sustainability journeys",
        "Start with the easiest changes to build momentum",
        "Remember that small actions add up to big changes",
    ],
    impact: "Foundation - Your starting point for maximum impact",
    reduction: None,
};

static LEADERSHIP: Template = Template {
    category: "Leadership & Advocacy",
    priority: Priority::Low,
    title: "You're a Sustainability Champion!",
    description: "Your low score shows excellent environmental consciousness. Help others \
                  follow your lead!",
    tips: &[
        "Share your sustainable practices with friends and family",
        "Volunteer for environmental organizations in your community",
        "Support businesses with strong sustainability commitments",
        "Consider carbon offsetting for any remaining emissions",
        "Advocate for environmental policies in your community",
        "Mentor others starting their sustainability journey",
    ],
    impact: "Leadership - Help multiply your positive impact",
    reduction: None,
};

static ENCOURAGEMENT: Template = Template {
    category: "Encouragement",
    priority: Priority::Low,
    title: "Keep Up the Great Work",
    description: "None of your answers stand out as a major impact area. Keep your good \
                  habits going!",
    tips: &[
        "Revisit the quiz in a few months to track your progress",
        "Pick one area and try to move it down a level",
        "Share what works for you with others",
    ],
    impact: "Maintenance - Protect the progress you have made",
    reduction: None,
};

/// Build the ranked suggestion list for one submission.
///
/// Never returns an empty list. The result is stably sorted by priority,
/// so suggestions of equal priority keep rule-table order, with the
/// "getting started" suggestion ahead of the other high-priority ones.
pub fn generate_suggestions(
    answers: &AnswerSet,
    total_score: u32,
    thresholds: &SuggestionThresholds,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let mut fired: Vec<QuestionId> = Vec::new();

    for rule in CATEGORY_RULES {
        if fired.contains(&rule.question) {
            continue;
        }
        let Some(value) = answers.get(rule.question) else {
            continue;
        };
        if rule.trigger.matches(value) {
            debug!(
                "Rule {:?} on '{}' fired for answer {value}",
                rule.trigger, rule.question
            );
            fired.push(rule.question);
            suggestions.push(rule.template.to_suggestion());
        }
    }

    if total_score >= thresholds.getting_started_min {
        suggestions.insert(0, GETTING_STARTED.to_suggestion());
    }
    if total_score <= thresholds.leadership_max {
        suggestions.push(LEADERSHIP.to_suggestion());
    }
    if suggestions.is_empty() {
        suggestions.push(ENCOURAGEMENT.to_suggestion());
    }

    suggestions.sort_by_key(|s| s.priority.rank());
    suggestions
}

/// Estimated total score reduction from following every suggestion.
///
/// Sums the midpoint of each suggestion's reduction range and caps the
/// result at `cap`. Suggestions without a range add nothing.
pub fn estimate_score_reduction(suggestions: &[Suggestion], cap: f64) -> f64 {
    let total: f64 = suggestions
        .iter()
        .filter_map(|s| s.reduction)
        .map(|range| range.midpoint())
        .sum();
    total.min(cap)
}
