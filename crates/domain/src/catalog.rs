use std::sync::LazyLock;

use crate::{BodyArea, Movement, Station};

/// Static catalog entry. Converted into an owned [`crate::Exercise`] when it enters a workout.
#[derive(Clone, Debug)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub target_muscle: BodyArea,
    pub secondary_muscles: &'static [BodyArea],
    pub movement: Movement,
    pub station: Station,
    pub description: &'static str,
    pub tips: &'static [&'static str],
}

static CATALOG: LazyLock<Vec<crate::Exercise>> =
    LazyLock::new(|| EXERCISES.iter().map(crate::Exercise::from).collect());

/// The exercise table, loaded once for the lifetime of the process.
#[must_use]
pub fn exercises() -> &'static [crate::Exercise] {
    &CATALOG
}

pub const EXERCISES: [Exercise; 28] = [
    Exercise {
        id: "chest-weighted-dip",
        name: "Weighted Dip",
        target_muscle: BodyArea::Chest,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::Bodyweight,
        description: "Perform a dip on parallel bars with added weight via a belt or vest. Lean forward slightly to target the chest.",
        tips: &[
            "Lean forward to hit the chest more than triceps.",
            "Go to 90 degrees at the elbow.",
            "Control the descent.",
        ],
    },
    Exercise {
        id: "chest-db-bench-press",
        name: "Dumbbell Bench Press",
        target_muscle: BodyArea::Chest,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::FreeWeights,
        description: "Flat bench press using dumbbells. Allows for greater range of motion and independent arm stabilization.",
        tips: &[
            "Bring dumbbells down deep for a stretch.",
            "Converge them slightly at the top but don't clang them together.",
            "Keep your feet planted.",
        ],
    },
    Exercise {
        id: "chest-crossover",
        name: "Cable Crossover",
        target_muscle: BodyArea::Chest,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::Cable,
        description: "Standing cable fly movement. Great for getting a peak contraction on the chest.",
        tips: &[
            "Focus on crossing your hands over each other at the end.",
            "Keep a slight bend in the elbows.",
            "Don't use momentum.",
        ],
    },
    Exercise {
        id: "chest-incline-db-press",
        name: "Incline Dumbbell Press",
        target_muscle: BodyArea::Chest,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::FreeWeights,
        description: "Bench press on an incline (approx 30 degrees) to target the upper clavicular head of the pecs.",
        tips: &[
            "Low incline (30 degrees) is better than steep (45) to avoid too much front delt.",
            "Control the weights.",
            "Full range of motion.",
        ],
    },
    Exercise {
        id: "chest-pushup",
        name: "Pushup (Standard or Weighted)",
        target_muscle: BodyArea::Chest,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::Bodyweight,
        description: "The classic pushup. Add weight on back if too easy.",
        tips: &[
            "Keep core tight (plank position).",
            "Elbows tucked at 45 degrees, not flared out.",
            "Full extension at top.",
        ],
    },
    Exercise {
        id: "back-pullup",
        name: "Pullup",
        target_muscle: BodyArea::Back,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::Bodyweight,
        description: "Overhand grip pullup. The king of back exercises.",
        tips: &[
            "Full hang at the bottom.",
            "Chin over bar at top.",
            "Drive elbows down to hips.",
        ],
    },
    Exercise {
        id: "back-face-pull",
        name: "Face Pull",
        target_muscle: BodyArea::Back,
        secondary_muscles: &[BodyArea::Shoulders, BodyArea::Corrective],
        movement: Movement::Pull,
        station: Station::Cable,
        description: "Cable exercise pulling rope to forehead. targets rear delts, rotator cuff, and traps. A Jeff Cavalier staple.",
        tips: &[
            "Lead with the hands, not the elbows.",
            "Beat the \"cheater\" by externally rotating at the end.",
            "Do these every workout if possible.",
        ],
    },
    Exercise {
        id: "back-barbell-row",
        name: "Barbell Row",
        target_muscle: BodyArea::Back,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::FreeWeights,
        description: "Bent over row with a barbell. Big compound movement for thickness.",
        tips: &[
            "Keep back straight, hinge at hips.",
            "Pull to lower chest/upper stomach.",
            "Don't yank the weight with your lower back.",
        ],
    },
    Exercise {
        id: "back-lat-pulldown",
        name: "Lat Pulldown",
        target_muscle: BodyArea::Back,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::Cable,
        description: "Vertical pulling movement using a cable machine.",
        tips: &[
            "Lean back slightly.",
            "Pull bar to upper chest.",
            "Focus on using lats, not arms.",
        ],
    },
    Exercise {
        id: "back-straight-arm-pushdown",
        name: "Straight Arm Pushdown",
        target_muscle: BodyArea::Back,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::Cable,
        description: "Cable isolation exercise for the lats.",
        tips: &[
            "Keep arms straight but not locked.",
            "Focus on the stretch at the top.",
            "Drive down with lats.",
        ],
    },
    Exercise {
        id: "legs-barbell-squat",
        name: "Barbell Squat",
        target_muscle: BodyArea::Legs,
        secondary_muscles: &[],
        movement: Movement::Legs,
        station: Station::FreeWeights,
        description: "High bar or low bar back squat.",
        tips: &[
            "Depth is key - break parallel.",
            "Knees track over toes.",
            "Keep chest up.",
        ],
    },
    Exercise {
        id: "legs-bulgarian-split-squat",
        name: "Bulgarian Split Squat",
        target_muscle: BodyArea::Legs,
        secondary_muscles: &[],
        movement: Movement::Legs,
        station: Station::FreeWeights,
        description: "Single leg squat with rear foot elevated.",
        tips: &[
            "Hate yourself while doing them, thank yourself later.",
            "Keep torso upright for quads, lean forward for glutes.",
            "Don't let front knee cave in.",
        ],
    },
    Exercise {
        id: "legs-rdl",
        name: "Romanian Deadlift (RDL)",
        target_muscle: BodyArea::Legs,
        secondary_muscles: &[],
        movement: Movement::Legs,
        station: Station::FreeWeights,
        description: "Hip hinge movement targeting hamstrings and glutes.",
        tips: &[
            "Slight bend in knees, movement comes from hips.",
            "Keep bar close to shins.",
            "Feel the stretch in hamstrings.",
        ],
    },
    Exercise {
        id: "legs-lunge",
        name: "Walking Lunge",
        target_muscle: BodyArea::Legs,
        secondary_muscles: &[],
        movement: Movement::Legs,
        station: Station::FreeWeights,
        description: "Dynamic single leg movement.",
        tips: &[
            "Take long steps to target glutes/hams, shorter for quads.",
            "Keep torso controlled.",
            "Touch back knee gently to ground.",
        ],
    },
    Exercise {
        id: "legs-glute-ham-raise",
        name: "Glute Ham Raise (or Nordic Curl)",
        target_muscle: BodyArea::Legs,
        secondary_muscles: &[],
        movement: Movement::Legs,
        station: Station::Bodyweight,
        description: "Bodyweight hamstring exercise.",
        tips: &[
            "Control the descent.",
            "Use hands to push up if you can't pull yourself up yet.",
            "Keep hips extended.",
        ],
    },
    Exercise {
        id: "shoulders-ohp",
        name: "Overhead Press (Barbell or DB)",
        target_muscle: BodyArea::Shoulders,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::FreeWeights,
        description: "Standing overhead press.",
        tips: &[
            "Tight core, squeeze glutes.",
            "Press strictly, no leg drive (unless Push Press).",
            "Head through the window at the top.",
        ],
    },
    Exercise {
        id: "shoulders-side-lateral",
        name: "Side Lateral Raise",
        target_muscle: BodyArea::Shoulders,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::FreeWeights,
        description: "Isolation for side delts.",
        tips: &[
            "Pour the pitcher (internal rotation) slightly.",
            "Lead with elbows.",
            "Don't swing the weight.",
        ],
    },
    Exercise {
        id: "shoulders-rear-delt-fly",
        name: "Rear Delt Fly (Reverse Pec Deck or Bent Over)",
        target_muscle: BodyArea::Shoulders,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::Machine,
        description: "Isolation for rear delts.",
        tips: &[
            "Don't squeeze shoulder blades together too early, focus on the arm movement.",
            "Thumbs down can help target rear delt.",
        ],
    },
    Exercise {
        id: "shoulders-arnold-press",
        name: "Arnold Press",
        target_muscle: BodyArea::Shoulders,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::FreeWeights,
        description: "Dumbbell press with rotation.",
        tips: &[
            "Start palms facing you, end palms facing away.",
            "Smooth rotation.",
            "Hits all heads of the delt.",
        ],
    },
    Exercise {
        id: "arms-chinup",
        name: "Chin Up",
        target_muscle: BodyArea::Arms,
        secondary_muscles: &[BodyArea::Back],
        movement: Movement::Pull,
        station: Station::Bodyweight,
        description: "Underhand grip pullup focusing on biceps.",
        tips: &[
            "Supinated grip (palms facing you).",
            "Focus on the squeeze at the top.",
            "Control the negative.",
        ],
    },
    Exercise {
        id: "arms-skullcrusher",
        name: "Skullcrusher / Lying Tricep Extension",
        target_muscle: BodyArea::Arms,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::FreeWeights,
        description: "Tricep isolation with EZ bar or dumbbells.",
        tips: &[
            "Keep elbows pointed up.",
            "Bring bar behind head for better stretch.",
            "Don't flare elbows too much.",
        ],
    },
    Exercise {
        id: "arms-spider-curl",
        name: "Spider Curl",
        target_muscle: BodyArea::Arms,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::FreeWeights,
        description: "Bicep curl on an incline bench, chest supported.",
        tips: &[
            "Prevents cheating with body momentum.",
            "Focus on the peak contraction.",
            "Full extension at bottom.",
        ],
    },
    Exercise {
        id: "arms-tricep-pushdown",
        name: "Tricep Pushdown (Rope or Bar)",
        target_muscle: BodyArea::Arms,
        secondary_muscles: &[],
        movement: Movement::Push,
        station: Station::Cable,
        description: "Cable pushdown for triceps.",
        tips: &[
            "Pin elbows to sides.",
            "Spread the rope at the bottom if using rope.",
            "Squeeze triceps hard.",
        ],
    },
    Exercise {
        id: "arms-waiter-curl",
        name: "Waiter Curl",
        target_muscle: BodyArea::Arms,
        secondary_muscles: &[],
        movement: Movement::Pull,
        station: Station::FreeWeights,
        description: "Single dumbbell held with both hands, wrists bent back.",
        tips: &[
            "Great for the long head of the bicep.",
            "Keep tension on the muscle.",
            "Don't let the weight rest at the bottom.",
        ],
    },
    Exercise {
        id: "abs-hanging-leg-raise",
        name: "Hanging Leg Raise",
        target_muscle: BodyArea::Abs,
        secondary_muscles: &[],
        movement: Movement::Core,
        station: Station::Bodyweight,
        description: "Hanging from a bar, raising legs to 90 degrees or toes to bar.",
        tips: &[
            "Don't swing.",
            "Curl the pelvis up to engage lower abs.",
            "Straight legs is harder, bent knees easier.",
        ],
    },
    Exercise {
        id: "abs-ab-wheel",
        name: "Ab Wheel Rollout",
        target_muscle: BodyArea::Abs,
        secondary_muscles: &[],
        movement: Movement::Core,
        station: Station::Bodyweight,
        description: "Rolling out on knees using an ab wheel.",
        tips: &[
            "Posterior pelvic tilt (tuck tailbone).",
            "Don't let lower back sag.",
            "Go only as far as you can control.",
        ],
    },
    Exercise {
        id: "abs-cable-crunch",
        name: "Cable Crunch",
        target_muscle: BodyArea::Abs,
        secondary_muscles: &[],
        movement: Movement::Core,
        station: Station::Cable,
        description: "Kneeling crunch using cable rope.",
        tips: &[
            "Don't use hips to sit back.",
            "Curl your spine like a shrimp.",
            "Exhale hard on the crunch.",
        ],
    },
    Exercise {
        id: "abs-plank",
        name: "RKC Plank",
        target_muscle: BodyArea::Abs,
        secondary_muscles: &[],
        movement: Movement::Core,
        station: Station::Bodyweight,
        description: "Standard plank but with high tension.",
        tips: &[
            "Squeeze glutes, quads, and fists.",
            "Pull elbows towards toes.",
            "Hold for shorter time with higher intensity.",
        ],
    },
];
