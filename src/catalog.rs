//! Static catalogs
//!
//! Fixed, ordered tables consulted by the derived-metric calculators. They are
//! plain `static` data and never mutated.

use crate::types::{AchievementDef, LifeEventDef, MilestoneDef, ZodiacSign};

/// Average life expectancy used for life-progress percentages (years)
pub const LIFE_EXPECTANCY_YEARS: f64 = 75.0;

/// Zodiac signs; Capricorn first so it doubles as the fallback entry
pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    sign("Capricorn", "♑", (12, 22), (1, 19)),
    sign("Aquarius", "♒", (1, 20), (2, 18)),
    sign("Pisces", "♓", (2, 19), (3, 20)),
    sign("Aries", "♈", (3, 21), (4, 19)),
    sign("Taurus", "♉", (4, 20), (5, 20)),
    sign("Gemini", "♊", (5, 21), (6, 20)),
    sign("Cancer", "♋", (6, 21), (7, 22)),
    sign("Leo", "♌", (7, 23), (8, 22)),
    sign("Virgo", "♍", (8, 23), (9, 22)),
    sign("Libra", "♎", (9, 23), (10, 22)),
    sign("Scorpio", "♏", (10, 23), (11, 21)),
    sign("Sagittarius", "♐", (11, 22), (12, 21)),
];

const fn sign(
    name: &'static str,
    icon: &'static str,
    start: (u32, u32),
    end: (u32, u32),
) -> ZodiacSign {
    ZodiacSign {
        name,
        icon,
        start_month: start.0,
        start_day: start.1,
        end_month: end.0,
        end_day: end.1,
    }
}

/// Upcoming milestone ages, ascending
pub static MILESTONES: [MilestoneDef; 11] = [
    MilestoneDef { age: 18, name: "Legal Adult" },
    MilestoneDef { age: 21, name: "Drinking Age" },
    MilestoneDef { age: 25, name: "Quarter Century" },
    MilestoneDef { age: 30, name: "Thirties" },
    MilestoneDef { age: 40, name: "Forties" },
    MilestoneDef { age: 50, name: "Half Century" },
    MilestoneDef { age: 60, name: "Sixties" },
    MilestoneDef { age: 70, name: "Seventies" },
    MilestoneDef { age: 80, name: "Eighties" },
    MilestoneDef { age: 90, name: "Nineties" },
    MilestoneDef { age: 100, name: "Century" },
];

/// Number of upcoming milestones reported
pub const UPCOMING_MILESTONES: usize = 3;

/// Achievement badges, ascending by threshold age
pub static ACHIEVEMENTS: [AchievementDef; 16] = [
    badge("first-year", "First Year", "👶", 1, "Survived first year!"),
    badge("toddler", "Toddler", "🚶", 3, "Walking and talking"),
    badge("school-age", "School Age", "🎒", 6, "Ready for school"),
    badge("preteen", "Preteen", "📱", 12, "Digital native"),
    badge("teenager", "Teenager", "🎵", 13, "Teen years begin"),
    badge("legal-adult", "Legal Adult", "🆔", 18, "You can vote!"),
    badge("drinking-age", "Drinking Age", "🍺", 21, "Legal to drink"),
    badge("quarter-century", "Quarter Century", "🎂", 25, "25 years young"),
    badge("thirties", "Thirties", "💼", 30, "Career focused"),
    badge("forties", "Forties", "🏠", 40, "Established"),
    badge("half-century", "Half Century", "🎯", 50, "50 years of wisdom"),
    badge("sixties", "Sixties", "🌅", 60, "Golden years"),
    badge("seventies", "Seventies", "👴", 70, "Senior wisdom"),
    badge("eighties", "Eighties", "🏆", 80, "Eighty and thriving"),
    badge("nineties", "Nineties", "💎", 90, "Diamond age"),
    badge("century", "Century", "👑", 100, "Century mark!"),
];

const fn badge(
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    age: u32,
    description: &'static str,
) -> AchievementDef {
    AchievementDef {
        id,
        name,
        icon,
        age,
        description,
    }
}

/// Life events placed on the timeline, ascending by age
pub static LIFE_EVENTS: [LifeEventDef; 16] = [
    LifeEventDef { age: 0, label: "Birth" },
    LifeEventDef { age: 1, label: "First Steps" },
    LifeEventDef { age: 3, label: "Started Talking" },
    LifeEventDef { age: 6, label: "Started School" },
    LifeEventDef { age: 12, label: "Preteen Years" },
    LifeEventDef { age: 18, label: "Legal Adult" },
    LifeEventDef { age: 21, label: "Drinking Age" },
    LifeEventDef { age: 25, label: "Quarter Century" },
    LifeEventDef { age: 30, label: "Thirties Begin" },
    LifeEventDef { age: 40, label: "Forties Begin" },
    LifeEventDef { age: 50, label: "Half Century" },
    LifeEventDef { age: 60, label: "Sixties Begin" },
    LifeEventDef { age: 70, label: "Seventies Begin" },
    LifeEventDef { age: 80, label: "Eighties Begin" },
    LifeEventDef { age: 90, label: "Nineties Begin" },
    LifeEventDef { age: 100, label: "Century Mark" },
];
