/// Random units in `[0, 1)` sampled by the caller.
///
/// Sampling happens outside this module so the particle math stays
/// deterministic and testable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticleSeed {
    pub size_unit: f64,
    pub alpha_unit: f64,
    pub x_unit: f64,
    pub duration_unit: f64,
    pub drift_unit: f64,
}

/// One stop of the particle's rise animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleKeyframe {
    pub translate_x: f64,
    pub translate_y: f64,
    pub opacity: f64,
}

/// Fully resolved spec for one floating particle.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpec {
    pub size_px: f64,
    pub opacity: f64,
    pub start_x: f64,
    pub duration_ms: f64,
    pub drift_px: f64,
    pub keyframes: [ParticleKeyframe; 3],
}

/// Builds a particle that rises from the bottom edge past the top of the
/// viewport, drifting sideways and fading out near the end.
pub fn particle_spec(seed: ParticleSeed, viewport_width: f64, viewport_height: f64) -> ParticleSpec {
    let size_px = seed.size_unit * 4.0 + 2.0;
    let opacity = seed.alpha_unit * 0.5 + 0.1;
    let start_x = seed.x_unit * viewport_width;
    let duration_ms = seed.duration_unit * 3000.0 + 2000.0;
    let drift_px = (seed.drift_unit - 0.5) * 100.0;
    let keyframes = [
        ParticleKeyframe {
            translate_x: 0.0,
            translate_y: 0.0,
            opacity: 0.0,
        },
        ParticleKeyframe {
            translate_x: drift_px,
            translate_y: -(viewport_height + 100.0),
            opacity: 1.0,
        },
        ParticleKeyframe {
            translate_x: drift_px * 2.0,
            translate_y: -(viewport_height + 200.0),
            opacity: 0.0,
        },
    ];
    ParticleSpec {
        size_px,
        opacity,
        start_x,
        duration_ms,
        drift_px,
        keyframes,
    }
}
