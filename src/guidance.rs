//! Phase guidance and the daily-log override rules layered on top of it.

use serde::Serialize;

use crate::models::{DailyLog, Level, Mood};
use crate::phase::Phase;

const LOW_SLEEP_HOURS: f64 = 6.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidanceCard {
    pub message: String,
    pub science: String,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
}

impl GuidanceCard {
    fn new(message: &str, science: &str, suggestions: &[&str]) -> Self {
        GuidanceCard {
            message: message.to_string(),
            science: science.to_string(),
            suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            modifier: None,
        }
    }

    fn override_with(&mut self, message: &str, modifier: &str) {
        self.message = message.to_string();
        self.modifier = Some(modifier.to_string());
    }
}

/// Four guidance categories. `fasting` is the meal-timing card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Guidance {
    pub training: GuidanceCard,
    pub nutrition: GuidanceCard,
    pub energy: GuidanceCard,
    pub fasting: GuidanceCard,
}

/// Guidance for `phase`, adjusted by today's log when there is one.
///
/// Rules run in a fixed order and later rules overwrite earlier ones on the
/// same card: low sleep, high stress, low luteal energy, poor mood.
pub fn get_guidance(phase: Phase, today_log: Option<&DailyLog>) -> Guidance {
    let mut guidance = base_guidance(phase);
    let Some(log) = today_log else {
        return guidance;
    };

    // Zero hours counts as not entered.
    if log.sleep.is_some_and(|h| h > 0.0 && h < LOW_SLEEP_HOURS) {
        guidance.training.override_with(
            "⚠️ Low sleep detected. Prioritise rest and gentle movement today.",
            "Your body repairs during sleep. Without adequate rest, intense training adds stress rather than building strength.",
        );
        guidance.fasting.override_with(
            "⚠️ Skip fasting today. Eat when hungry to support recovery.",
            "Sleep deprivation disrupts hunger hormones. Your body needs consistent fuel to recover.",
        );
    }

    if log.stress == Level::High {
        guidance.training.override_with(
            "⚠️ High stress detected. Gentle movement like walking or yoga is best.",
            "Cortisol is already elevated. Intense exercise adds more stress. Choose restorative movement.",
        );
        guidance.energy.override_with(
            "⚠️ Your nervous system needs support. Prioritise calming activities.",
            "High cortisol can deplete neurotransmitters. Rest isn't lazy - it's essential.",
        );
        guidance.fasting.override_with(
            "⚠️ Eat regularly today. Fasting adds stress when cortisol is high.",
            "Fasting triggers cortisol release. With stress already high, this compounds the problem.",
        );
    }

    if log.energy == Level::Low && phase.is_luteal() {
        guidance.training.override_with(
            "Low energy in luteal phase is completely normal. Light stretching or rest.",
            "Progesterone naturally lowers energy. This is your body preparing for menstruation - honour it.",
        );
    }

    if log.mood == Mood::Poor {
        guidance.energy.override_with(
            "Low mood is okay. Movement can help, but so can rest. Do what feels right.",
            "Gentle exercise releases endorphins, but forcing yourself backfires. Listen to your needs.",
        );
    }

    guidance
}

pub fn base_guidance(phase: Phase) -> Guidance {
    match phase {
        Phase::Menstrual => Guidance {
            training: GuidanceCard::new(
                "Gentle movement, yoga, or walks. Honour your body's need for rest.",
                "During menstruation, progesterone and estrogen are at their lowest. Energy levels naturally dip, and your body is focused on shedding the uterine lining.",
                &["Restorative yoga", "Walking", "Gentle stretching", "Rest days"],
            ),
            nutrition: GuidanceCard::new(
                "Iron-rich foods and anti-inflammatory meals. Warming soups and stews.",
                "You're losing iron through menstruation. Anti-inflammatory foods help reduce prostaglandins that cause cramping.",
                &["Leafy greens", "Red meat or lentils", "Ginger tea", "Turmeric", "Bone broth"],
            ),
            energy: GuidanceCard::new(
                "Rest is productive. Low social energy is natural, say no without guilt or keep it close 💖",
                "Low hormone levels can affect mood and energy. This is a natural time for introspection and rest.",
                &["Journal", "Light social activities", "Early bedtime", "Self compassion"],
            ),
            fasting: GuidanceCard::new(
                "Nourishment first, your body needs the fuel",
                "Your body needs consistent fuel during menstruation. Not eating can trigger cortisol release when energy is already low.",
                &["Eat when hungry", "Focus on nourishment"],
            ),
        },
        Phase::Follicular => Guidance {
            training: GuidanceCard::new(
                "Perfect time for strength training and HIIT. Your body is primed for power!",
                "Rising estrogen improves insulin sensitivity, muscle protein synthesis, and pain tolerance. You recover faster and build strength more efficiently.",
                &["Heavy lifts", "HIIT", "New PRs", "Pushing feels good"],
            ),
            nutrition: GuidanceCard::new(
                "Higher whole carbs with lean protein. Fiber-rich foods support rising energy and your digestion is strong.",
                "Estrogen enhances carbohydrate metabolism. Your body efficiently uses carbs for energy and muscle building.",
                &["Kimchi & Kefir", "Sweet potatoes", "Chicken, Fish", "Summer Rolls", "steamed"],
            ),
            energy: GuidanceCard::new(
                "Rising energy and optimism. Great time for social activities and new projects.",
                "Estrogen increases serotonin and dopamine production, boosting mood, motivation, and cognitive function.",
                &["Start new projects", "Social events", "Dating", "Networking"],
            ),
            fasting: GuidanceCard::new(
                "Do what feels good to you, listen to your body.",
                "Higher estrogen improves insulin sensitivity so fasting is tolerated, but pay attention to hunger cues.",
                &["Listen to your body", "Nourish your activity"],
            ),
        },
        Phase::Ovulatory => Guidance {
            training: GuidanceCard::new(
                "High intensity workouts and group classes. Peak performance window!",
                "Estrogen peaks and testosterone rises. Pain tolerance is highest, and you have maximum strength and endurance.",
                &["I can do anything", "HIIT", "Group fitness", "Compete with yourself"],
            ),
            nutrition: GuidanceCard::new(
                "Fibre and antioxidants. Your digestion is strong 💪 enjoy raw veggies!",
                "Estrogen supports gut motility and metabolism. Your body handles fibre and raw foods easily.",
                &["Fatty fish", "Berries", "Colourful vegetables", "Nuts and seeds", "Whole grains"],
            ),
            energy: GuidanceCard::new(
                "Peak social energy! Schedule important meetings and social events now.",
                "Peak estrogen enhances communication skills, confidence, and emotional connection. You're at your most charismatic and pheromones are strong.",
                &["Networking events", "Social gatherings", "Safe sex", "Dating", "Public speaking"],
            ),
            fasting: GuidanceCard::new(
                "Flexible, your insulin sensitivity is optimal.",
                "Peak estrogen optimises metabolic flexibility. You can fast or eat more freely.",
                &["Intuitive eating", "Any window works"],
            ),
        },
        Phase::Luteal => Guidance {
            training: GuidanceCard::new(
                "Moderate intensity movement, pilates, swimming, or steady cardio work well.",
                "Progesterone rises, which can increase body temperature and reduce exercise tolerance. Focus on sustainable movement.",
                &["Pilates", "Swimming", "Moderate cardio", "Strength maintenance"],
            ),
            nutrition: GuidanceCard::new(
                "Complex carbs and magnesium-rich foods. Honour cravings mindfully.",
                "Progesterone increases appetite and shifts metabolism. Your body needs more calories (about 100-300 more per day).",
                &["Oatmeal", "Dark chocolate", "Pumpkin seeds", "Bananas", "Whole grains"],
            ),
            energy: GuidanceCard::new(
                "Energy gradually declines. Focus on completing tasks and nesting.",
                "Progesterone has a calming, sedating effect. This is natural preparation for your period or potential pregnancy.",
                &["Finish projects", "Home organisation", "Cozy activities", "Self-care"],
            ),
            fasting: GuidanceCard::new(
                "Listen to hunger cues. Your body may need more frequent nourishment.",
                "Progesterone increases appetite and metabolic rate. Fasting can trigger stress hormones and worsen PMS.",
                &["Shorter windows", "Eat regularly", "Honour hunger"],
            ),
        },
        Phase::EarlyLuteal => Guidance {
            training: GuidanceCard::new(
                "Moderate intensity works well. Pilates, swimming, barre, or steady cardio.",
                "Progesterone rises and body temperature increases slightly. You can still train well, but recovery takes a bit longer than follicular phase.",
                &["Pilates", "Swimming", "Moderate strength training", "Steady cardio"],
            ),
            nutrition: GuidanceCard::new(
                "Complex carbs with protein. Your appetite is increasing which is normal.",
                "Metabolic rate rises by 100-300 calories per day. Your body genuinely needs more food as progesterone increases.",
                &["Whole grains", "Potatoes", "Salmon", "Spinach", "Nut butters"],
            ),
            energy: GuidanceCard::new(
                "Productive energy for completing tasks. Good time to finish what you started.",
                "Progesterone has a calming effect that can feel centring and focused. Less sparkle than ovulation, but steady.",
                &["Finish projects", "Admin work", "Organising", "Small social gatherings"],
            ),
            fasting: GuidanceCard::new(
                "Your body needs more fuel as metabolism rises.",
                "Progesterone increases metabolic rate and appetite. Not honouring hunger may not feel comfortable.",
                &["Listen to hunger", "Eat regularly"],
            ),
        },
        Phase::LateLuteal => Guidance {
            training: GuidanceCard::new(
                "Gentle movement - walking, stretching, restorative yoga. Rest is productive.",
                "Progesterone drops sharply, which can affect energy and mood. Your body is preparing for menstruation. Intense training adds stress.",
                &["Walking", "Yin yoga", "Stretching", "Rest days"],
            ),
            nutrition: GuidanceCard::new(
                "Magnesium-rich foods, complex carbs, and honouring cravings. You need MORE food, not less.",
                "Serotonin drops with declining hormones, triggering carb cravings. Your metabolic rate is still elevated. Restricting food worsens PMS significantly.",
                &["Chickpeas", "Dates", "Grounding foods", "Nothing cold", "Dark chocolate", "Satisfying meals"],
            ),
            energy: GuidanceCard::new(
                "Low energy and irritability are normal. PMS is real. Be gentle with yourself.",
                "Sharp hormone drops affect neurotransmitters. Your tolerance for stress decreases biologically.",
                &["Say no to obligations", "Rest", "Solo time", "Gentle self-care", "Early bedtime"],
            ),
            fasting: GuidanceCard::new(
                "Eat regularly to stabilise mood, blood sugar and energy.",
                "Fasting triggers cortisol release. With hormones already dropping, this compounds stress and worsens PMS dramatically.",
                &["Eat when hungry", "Regular meals", "Nourishment first", "No fasting"],
            ),
        },
    }
}
