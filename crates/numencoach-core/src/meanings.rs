//! # Narrative Lookup Tables
//!
//! Read-only text keyed by numbers the engine produces. Every lookup
//! returns `Option`; callers substitute generic text on a miss.
//!
//! | Table                 | Keys                 |
//! |-----------------------|----------------------|
//! | `number_meaning`      | 1-9, 11, 22, 33      |
//! | `lucky_day/color`     | 1-9, 11, 22, 33      |
//! | `pinnacle_meaning`    | 1-9, 11, 22, 33      |
//! | `challenge_meaning`   | 0-8                  |
//! | `karmic_debt_meaning` | 13, 14, 16, 19       |

use serde::{Deserialize, Serialize};

use crate::ResultsBundle;

/// Narrative for a core number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberMeaning {
    pub summary: &'static str,
    pub strengths: [&'static str; 3],
    pub weaknesses: [&'static str; 3],
    pub coaching: [&'static str; 3],
}

/// Narrative for a karmic debt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KarmicDebtMeaning {
    pub summary: &'static str,
    pub meaning: &'static str,
    pub lesson: &'static str,
}

static NUMBER_MEANINGS: [(u32, NumberMeaning); 12] = [
    (
        1,
        NumberMeaning {
            summary: "Natural leader with pioneering spirit",
            strengths: [
                "Strong leadership qualities",
                "Independent and self-reliant",
                "Innovative and original thinking",
            ],
            weaknesses: [
                "Can be overly aggressive",
                "Tendency to be impatient",
                "May struggle with collaboration",
            ],
            coaching: [
                "Practice active listening in team settings",
                "Channel ambition into constructive projects",
                "Develop patience through mindfulness exercises",
            ],
        },
    ),
    (
        2,
        NumberMeaning {
            summary: "Diplomatic peacemaker and collaborator",
            strengths: [
                "Excellent cooperative abilities",
                "Natural diplomacy and tact",
                "Sensitive to others' needs",
            ],
            weaknesses: [
                "May be overly sensitive",
                "Can lack self-confidence",
                "Tendency to avoid confrontation",
            ],
            coaching: [
                "Build assertiveness through small daily practices",
                "Trust your intuitive insights more",
                "Set clear personal boundaries in relationships",
            ],
        },
    ),
    (
        3,
        NumberMeaning {
            summary: "Creative communicator and entertainer",
            strengths: [
                "Natural artistic abilities",
                "Excellent communication skills",
                "Optimistic and enthusiastic",
            ],
            weaknesses: [
                "Can be scattered or unfocused",
                "Tendency to exaggerate",
                "May struggle with discipline",
            ],
            coaching: [
                "Create structured creative time blocks",
                "Practice focused attention on one project",
                "Use your communication skills to inspire others",
            ],
        },
    ),
    (
        4,
        NumberMeaning {
            summary: "Practical builder and systematic organizer",
            strengths: [
                "Strong organizational skills",
                "Reliable and dependable",
                "Excellent attention to detail",
            ],
            weaknesses: [
                "Can be overly rigid",
                "May resist change",
                "Tendency to be pessimistic",
            ],
            coaching: [
                "Introduce small changes regularly to build flexibility",
                "Celebrate progress along the way",
                "Use your organizing skills to help others",
            ],
        },
    ),
    (
        5,
        NumberMeaning {
            summary: "Adventurous free spirit seeking variety",
            strengths: [
                "Adaptable and versatile",
                "Natural curiosity and learning ability",
                "Excellent communication skills",
            ],
            weaknesses: [
                "Can be restless or impatient",
                "May lack commitment",
                "Tendency to be impulsive",
            ],
            coaching: [
                "Channel restlessness into learning new skills",
                "Practice commitment in small areas first",
                "Use variety to maintain long-term engagement",
            ],
        },
    ),
    (
        6,
        NumberMeaning {
            summary: "Nurturing caregiver and family protector",
            strengths: [
                "Strong sense of responsibility",
                "Natural healing and counseling abilities",
                "Deep love for family and home",
            ],
            weaknesses: [
                "Can be overly protective",
                "Tendency to worry excessively",
                "May neglect own needs",
            ],
            coaching: [
                "Practice self-care as act of service to others",
                "Set healthy boundaries in caregiving",
                "Trust others to handle their own challenges",
            ],
        },
    ),
    (
        7,
        NumberMeaning {
            summary: "Spiritual seeker and analytical thinker",
            strengths: [
                "Deep analytical abilities",
                "Strong intuition and spiritual connection",
                "Natural research and investigation skills",
            ],
            weaknesses: [
                "Can be overly solitary",
                "May be too critical",
                "Tendency to overthink",
            ],
            coaching: [
                "Balance solitude with meaningful social connection",
                "Trust intuitive insights alongside analysis",
                "Share your wisdom with others who can benefit",
            ],
        },
    ),
    (
        8,
        NumberMeaning {
            summary: "Ambitious achiever and material success oriented",
            strengths: [
                "Strong business acumen",
                "Natural leadership in material world",
                "Excellent organizational abilities",
            ],
            weaknesses: [
                "Can be overly materialistic",
                "May be impatient with others",
                "Tendency to be workaholic",
            ],
            coaching: [
                "Balance material goals with spiritual growth",
                "Practice delegating and team building",
                "Use success to create positive impact for others",
            ],
        },
    ),
    (
        9,
        NumberMeaning {
            summary: "Humanitarian idealist and global thinker",
            strengths: [
                "Strong compassion and empathy",
                "Natural teaching and mentoring abilities",
                "Broad perspective and wisdom",
            ],
            weaknesses: [
                "Can be overly emotional",
                "May be too idealistic",
                "Tendency to be moody",
            ],
            coaching: [
                "Channel emotions into constructive service",
                "Start with small, practical humanitarian acts",
                "Practice grounding techniques for emotional balance",
            ],
        },
    ),
    (
        11,
        NumberMeaning {
            summary: "Intuitive master teacher and spiritual messenger",
            strengths: [
                "Highly developed intuition",
                "Natural spiritual and psychic abilities",
                "Inspiring and uplifting to others",
            ],
            weaknesses: [
                "Can be overly sensitive to energy",
                "May struggle with practical matters",
                "Tendency toward anxiety",
            ],
            coaching: [
                "Develop strong grounding practices daily",
                "Trust and act on your intuitive insights",
                "Create systems to handle practical responsibilities",
            ],
        },
    ),
    (
        22,
        NumberMeaning {
            summary: "Master builder of lasting institutions",
            strengths: [
                "Ability to manifest large-scale visions",
                "Combines spirituality with practical action",
                "Natural leadership for humanitarian causes",
            ],
            weaknesses: [
                "Can feel overwhelmed by potential",
                "May struggle with self-doubt",
                "Tendency to be perfectionist",
            ],
            coaching: [
                "Break large visions into manageable steps",
                "Celebrate small wins along the journey",
                "Build supportive team around your vision",
            ],
        },
    ),
    (
        33,
        NumberMeaning {
            summary: "Master teacher and healer of humanity",
            strengths: [
                "Exceptional compassion and empathy",
                "Natural healing and teaching abilities",
                "Inspiring others to their highest potential",
            ],
            weaknesses: [
                "Can take on others' pain too readily",
                "May sacrifice own needs excessively",
                "Tendency toward emotional overwhelm",
            ],
            coaching: [
                "Practice energetic protection techniques",
                "Maintain healthy boundaries in service",
                "Remember that self-care enables greater service",
            ],
        },
    ),
];

static LUCKY_DAYS: [(u32, &str); 12] = [
    (1, "Sunday"),
    (2, "Monday"),
    (3, "Thursday"),
    (4, "Saturday"),
    (5, "Wednesday"),
    (6, "Friday"),
    (7, "Monday"),
    (8, "Saturday"),
    (9, "Tuesday"),
    (11, "Monday"),
    (22, "Saturday"),
    (33, "Thursday"),
];

static LUCKY_COLORS: [(u32, &str); 12] = [
    (1, "Yellow/Gold"),
    (2, "White/Silver"),
    (3, "Green/Turquoise"),
    (4, "Blue/Navy"),
    (5, "Orange/Saffron"),
    (6, "Purple/Violet"),
    (7, "Silver/Grey"),
    (8, "Red/Maroon"),
    (9, "Brown/Copper"),
    (11, "Silver/White"),
    (22, "Blue/Gold"),
    (33, "Green/Purple"),
];

static KARMIC_DEBT_MEANINGS: [(u32, KarmicDebtMeaning); 4] = [
    (
        13,
        KarmicDebtMeaning {
            summary: "Karmic debt of laziness and negativity",
            meaning: "Past life laziness must be overcome through hard work and positive focus",
            lesson: "Develop discipline, focus, and constructive work habits",
        },
    ),
    (
        14,
        KarmicDebtMeaning {
            summary: "Karmic debt of abuse of freedom",
            meaning: "Past life misuse of freedom requires learning moderation and responsibility",
            lesson: "Practice moderation, commitment, and responsible use of freedom",
        },
    ),
    (
        16,
        KarmicDebtMeaning {
            summary: "Karmic debt of ego and selfishness",
            meaning: "Past life ego and selfishness must be balanced with humility and service",
            lesson: "Develop humility, compassion, and service to others",
        },
    ),
    (
        19,
        KarmicDebtMeaning {
            summary: "Karmic debt of abuse of power",
            meaning: "Past life misuse of power requires learning to help others without expecting return",
            lesson: "Use power wisely, help others selflessly, develop independence",
        },
    ),
];

static PINNACLE_MEANINGS: [(u32, &str); 12] = [
    (1, "Leadership and independence phase - time to pioneer new paths"),
    (2, "Cooperation and partnership phase - focus on relationships and teamwork"),
    (3, "Creative expression phase - time for artistic and communication pursuits"),
    (4, "Building and foundation phase - focus on practical work and stability"),
    (5, "Freedom and adventure phase - time for travel and new experiences"),
    (6, "Service and responsibility phase - focus on family and community service"),
    (7, "Spiritual development phase - time for inner growth and study"),
    (8, "Material achievement phase - focus on business success and recognition"),
    (9, "Humanitarian service phase - time to serve humanity and share wisdom"),
    (11, "Spiritual leadership phase - inspire others through intuitive insights"),
    (22, "Master builder phase - manifest large-scale visions for humanity"),
    (33, "Master teacher phase - heal and teach through compassionate service"),
];

static CHALLENGE_MEANINGS: [(u32, &str); 9] = [
    (0, "All challenges overcome - focus on service and helping others"),
    (1, "Learn independence and leadership without being overly aggressive"),
    (2, "Develop cooperation and sensitivity without being overly emotional"),
    (3, "Express creativity and communication without scattering energy"),
    (4, "Build practical foundations without being overly rigid"),
    (5, "Use freedom constructively without being irresponsible"),
    (6, "Accept responsibility without being overly controlling"),
    (7, "Develop faith and inner wisdom without withdrawing from life"),
    (8, "Handle material success without becoming overly materialistic"),
];

fn lookup<T: Copy>(table: &[(u32, T)], key: u32) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Narrative for a core number.
#[must_use]
pub fn number_meaning(n: u32) -> Option<&'static NumberMeaning> {
    NUMBER_MEANINGS.iter().find(|(k, _)| *k == n).map(|(_, m)| m)
}

#[must_use]
pub fn lucky_day(n: u32) -> Option<&'static str> {
    lookup(&LUCKY_DAYS, n)
}

#[must_use]
pub fn lucky_color(n: u32) -> Option<&'static str> {
    lookup(&LUCKY_COLORS, n)
}

#[must_use]
pub fn karmic_debt_meaning(n: u32) -> Option<KarmicDebtMeaning> {
    lookup(&KARMIC_DEBT_MEANINGS, n)
}

#[must_use]
pub fn pinnacle_meaning(n: u32) -> Option<&'static str> {
    lookup(&PINNACLE_MEANINGS, n)
}

#[must_use]
pub fn challenge_meaning(n: u32) -> Option<&'static str> {
    lookup(&CHALLENGE_MEANINGS, n)
}

// =============================================================================
// COACHING TEXT
// =============================================================================

/// How complete the inputs to a coaching text were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
}

/// Headline coaching block for a results bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingText {
    pub title: String,
    pub summary: String,
    pub actions: [String; 3],
    pub confidence: Confidence,
}

/// Build the coaching block from Life Path, Expression and Soul Urge.
#[must_use]
pub fn coaching_text(results: &ResultsBundle) -> CoachingText {
    let life_path = results.life_path.value;
    let expression = results.expression.value;
    let soul_urge = results.soul_urge.value;

    let lp = number_meaning(life_path);
    let ex = number_meaning(expression);
    let su = number_meaning(soul_urge);

    let lower = |m: Option<&NumberMeaning>, fallback: &str| {
        m.map_or_else(|| fallback.to_string(), |m| m.summary.to_lowercase())
    };

    let title = lp
        .map(|m| m.summary.split(' ').take(3).collect::<Vec<_>>().join(" "))
        .unwrap_or_else(|| "Unique Path".to_string());

    let summary = format!(
        "Your Life Path {life_path} reveals {}. Your Expression number {expression} shows {}. \
         Inner motivation (Soul Urge {soul_urge}) drives you toward {}.",
        lower(lp, "a unique journey"),
        lower(ex, "special talents"),
        lower(su, "meaningful experiences"),
    );

    let first_action = |m: Option<&NumberMeaning>, fallback: &str| {
        m.map_or(fallback, |m| m.coaching[0]).to_string()
    };
    let actions = [
        first_action(lp, "Focus on developing your natural talents"),
        first_action(ex, "Express your authentic self confidently"),
        first_action(su, "Listen to your inner guidance"),
    ];

    let confidence = if life_path != 0 && expression != 0 && soul_urge != 0 {
        Confidence::High
    } else {
        Confidence::Medium
    };

    CoachingText {
        title,
        summary,
        actions,
        confidence,
    }
}

// =============================================================================
// TESTS
// =============================================================================
