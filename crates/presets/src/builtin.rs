//! The fixed, read-only catalog of built-in presets.

use gradient_studio_core::gradient::{Gradient, GradientKind, Position, RadialSize};
use gradient_studio_core::stop::ColorStop;

use crate::preset::Preset;

struct BuiltinSpec {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    kind: GradientKind,
    angle: f64,
    center: (f64, f64),
    stops: &'static [(f64, &'static str, f64)],
}

const BUILTINS: [BuiltinSpec; 24] = [
    BuiltinSpec {
        id: "sunset-orange",
        name: "Sunset Orange",
        category: "popular",
        kind: GradientKind::Linear,
        angle: 45.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff9a9e", 1.0), (100.0, "#fecfef", 1.0)],
    },
    BuiltinSpec {
        id: "ocean-blue",
        name: "Ocean Blue",
        category: "popular",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#2196f3", 1.0), (100.0, "#21cbf3", 1.0)],
    },
    BuiltinSpec {
        id: "purple-pink",
        name: "Purple Pink",
        category: "popular",
        kind: GradientKind::Linear,
        angle: 135.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#667eea", 1.0), (100.0, "#764ba2", 1.0)],
    },
    BuiltinSpec {
        id: "green-teal",
        name: "Green Teal",
        category: "nature",
        kind: GradientKind::Linear,
        angle: 90.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#11998e", 1.0), (100.0, "#38ef7d", 1.0)],
    },
    BuiltinSpec {
        id: "warm-flame",
        name: "Warm Flame",
        category: "sunset",
        kind: GradientKind::Linear,
        angle: 45.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff9a9e", 1.0), (50.0, "#fad0c4", 1.0), (100.0, "#fad0c4", 1.0)],
    },
    BuiltinSpec {
        id: "night-fade",
        name: "Night Fade",
        category: "monochrome",
        kind: GradientKind::Linear,
        angle: 0.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#a18cd1", 1.0), (100.0, "#fbc2eb", 1.0)],
    },
    BuiltinSpec {
        id: "spring-warmth",
        name: "Spring Warmth",
        category: "nature",
        kind: GradientKind::Linear,
        angle: 135.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#fad0c4", 1.0), (100.0, "#ffd1ff", 1.0)],
    },
    BuiltinSpec {
        id: "juicy-peach",
        name: "Juicy Peach",
        category: "sunset",
        kind: GradientKind::Linear,
        angle: 90.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ffecd2", 1.0), (100.0, "#fcb69f", 1.0)],
    },
    BuiltinSpec {
        id: "young-passion",
        name: "Young Passion",
        category: "popular",
        kind: GradientKind::Linear,
        angle: 45.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff8177", 1.0), (50.0, "#ff867a", 1.0), (100.0, "#ff8c7f", 1.0)],
    },
    BuiltinSpec {
        id: "lady-lips",
        name: "Lady Lips",
        category: "popular",
        kind: GradientKind::Linear,
        angle: 135.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff9a9e", 1.0), (100.0, "#f6416c", 1.0)],
    },
    BuiltinSpec {
        id: "sunny-morning",
        name: "Sunny Morning",
        category: "sunset",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#f6d365", 1.0), (100.0, "#fda085", 1.0)],
    },
    BuiltinSpec {
        id: "rainy-ashville",
        name: "Rainy Ashville",
        category: "nature",
        kind: GradientKind::Linear,
        angle: 90.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#fbc2eb", 1.0), (100.0, "#a6c1ee", 1.0)],
    },
    BuiltinSpec {
        id: "frozen-dreams",
        name: "Frozen Dreams",
        category: "ocean",
        kind: GradientKind::Linear,
        angle: 135.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#fdcbf1", 1.0), (100.0, "#e6dee9", 1.0)],
    },
    BuiltinSpec {
        id: "winter-neva",
        name: "Winter Neva",
        category: "ocean",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#a8edea", 1.0), (100.0, "#fed6e3", 1.0)],
    },
    BuiltinSpec {
        id: "dusty-grass",
        name: "Dusty Grass",
        category: "nature",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#d299c2", 1.0), (100.0, "#fef9d7", 1.0)],
    },
    BuiltinSpec {
        id: "tempting-azure",
        name: "Tempting Azure",
        category: "ocean",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#84fab0", 1.0), (100.0, "#8fd3f4", 1.0)],
    },
    BuiltinSpec {
        id: "heavy-rain",
        name: "Heavy Rain",
        category: "monochrome",
        kind: GradientKind::Linear,
        angle: 90.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#cfd9df", 1.0), (100.0, "#e2ebf0", 1.0)],
    },
    BuiltinSpec {
        id: "amy-crisp",
        name: "Amy Crisp",
        category: "popular",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#a6c0fe", 1.0), (100.0, "#f68084", 1.0)],
    },
    BuiltinSpec {
        id: "mean-fruit",
        name: "Mean Fruit",
        category: "sunset",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#fceabb", 1.0), (100.0, "#f8b500", 1.0)],
    },
    BuiltinSpec {
        id: "deep-blue",
        name: "Deep Blue",
        category: "ocean",
        kind: GradientKind::Linear,
        angle: 120.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#6a11cb", 1.0), (100.0, "#2575fc", 1.0)],
    },
    BuiltinSpec {
        id: "radial-sunset",
        name: "Radial Sunset",
        category: "sunset",
        kind: GradientKind::Radial,
        angle: 0.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff9a9e", 1.0), (50.0, "#fecfef", 1.0), (100.0, "#fecfef", 0.5)],
    },
    BuiltinSpec {
        id: "radial-ocean",
        name: "Radial Ocean",
        category: "ocean",
        kind: GradientKind::Radial,
        angle: 0.0,
        center: (30.0, 30.0),
        stops: &[(0.0, "#2196f3", 1.0), (70.0, "#21cbf3", 0.8), (100.0, "#ffffff", 0.3)],
    },
    BuiltinSpec {
        id: "rainbow-wheel",
        name: "Rainbow Wheel",
        category: "rainbow",
        kind: GradientKind::Conic,
        angle: 0.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff0000", 1.0), (16.66, "#ff8000", 1.0), (33.33, "#ffff00", 1.0), (50.0, "#00ff00", 1.0), (66.66, "#0080ff", 1.0), (83.33, "#8000ff", 1.0), (100.0, "#ff0000", 1.0)],
    },
    BuiltinSpec {
        id: "conic-sunset",
        name: "Conic Sunset",
        category: "sunset",
        kind: GradientKind::Conic,
        angle: 45.0,
        center: (50.0, 50.0),
        stops: &[(0.0, "#ff9a9e", 1.0), (25.0, "#fad0c4", 1.0), (50.0, "#ffecd2", 1.0), (75.0, "#fcb69f", 1.0), (100.0, "#ff9a9e", 1.0)],
    },
];

impl BuiltinSpec {
    fn to_preset(&self) -> Preset {
        let (x, y) = self.center;
        Preset {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category.to_string(),
            gradient: Gradient {
                kind: self.kind,
                angle: self.angle,
                position: Position::new(x, y),
                size: RadialSize::FarthestCorner,
                color_stops: self
                    .stops
                    .iter()
                    .map(|&(position, color, opacity)| ColorStop {
                        position,
                        color: color.to_string(),
                        opacity,
                    })
                    .collect(),
                repeating: false,
            },
            custom: false,
            created: None,
            updated: None,
            imported: None,
        }
    }
}

/// All built-in presets, in catalog order.
pub fn builtin_presets() -> Vec<Preset> {
    BUILTINS.iter().map(BuiltinSpec::to_preset).collect()
}
