//! Fixed colour tables for cluster markers and edge strength.

/// Category palette indexed by cluster label.
pub const CLUSTER_PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Six-stop approximation of the Plasma colormap, weak to strong.
pub const STRENGTH_SCALE: [&str; 6] = [
    "#0d0887", "#6a00a8", "#b12a90", "#e16462", "#fca636", "#f0f921",
];

pub const SELECTED_COLOR: &str = "red";
pub const UNCLUSTERED_COLOR: &str = "lightblue";

/// Marker colour for a cluster label; negative labels wrap like positive ones.
pub fn cluster_color(label: Option<i64>) -> &'static str {
    match label {
        Some(l) => CLUSTER_PALETTE[l.rem_euclid(CLUSTER_PALETTE.len() as i64) as usize],
        None => UNCLUSTERED_COLOR,
    }
}

/// Edge colour for a strength in [0, 1]. Stops are not interpolated.
pub fn strength_color(strength: f64) -> &'static str {
    let last = STRENGTH_SCALE.len() - 1;
    let scaled = (strength * last as f64).floor();
    // NaN falls through both comparisons and lands on the first stop
    let index = if scaled >= last as f64 {
        last
    } else if scaled > 0.0 {
        scaled as usize
    } else {
        0
    };
    STRENGTH_SCALE[index]
}

/// CSS gradient for the strength legend, built from the same stops.
pub fn strength_gradient_css() -> String {
    format!("linear-gradient(to right, {})", STRENGTH_SCALE.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_buckets_floor() {
        assert_eq!(strength_color(0.0), "#0d0887");
        assert_eq!(strength_color(0.19), "#0d0887");
        assert_eq!(strength_color(0.2), "#6a00a8");
        assert_eq!(strength_color(0.5), "#b12a90");
        assert_eq!(strength_color(0.79), "#e16462");
        assert_eq!(strength_color(0.99), "#fca636");
        assert_eq!(strength_color(1.0), "#f0f921");
    }

    #[test]
    fn strength_out_of_range_is_clamped() {
        assert_eq!(strength_color(1.7), "#f0f921");
        assert_eq!(strength_color(-0.4), "#0d0887");
        assert_eq!(strength_color(f64::NAN), "#0d0887");
        assert_eq!(strength_color(f64::INFINITY), "#f0f921");
    }

    #[test]
    fn cluster_palette_wraps() {
        assert_eq!(cluster_color(Some(0)), "#1f77b4");
        assert_eq!(cluster_color(Some(7)), "#7f7f7f");
        assert_eq!(cluster_color(Some(10)), "#1f77b4");
        assert_eq!(cluster_color(Some(23)), "#d62728");
        assert_eq!(cluster_color(Some(-1)), "#17becf");
        assert_eq!(cluster_color(None), UNCLUSTERED_COLOR);
    }

    #[test]
    fn legend_gradient_lists_every_stop() {
        let css = strength_gradient_css();
        assert!(css.starts_with("linear-gradient(to right, #0d0887"));
        assert!(css.ends_with("#f0f921)"));
        assert_eq!(css.matches('#').count(), STRENGTH_SCALE.len());
    }

    proptest::proptest! {
        #[test]
        fn cluster_color_is_label_mod_palette(label in proptest::prelude::any::<i64>()) {
            let expected = CLUSTER_PALETTE[label.rem_euclid(10) as usize];
            proptest::prop_assert_eq!(cluster_color(Some(label)), expected);
        }

        #[test]
        fn strength_color_is_clamped_floor_lookup(strength in proptest::num::f64::ANY) {
            let color = strength_color(strength);
            let expected = if strength.is_nan() {
                STRENGTH_SCALE[0]
            } else {
                let bucket = (strength * 5.0).floor().clamp(0.0, 5.0);
                STRENGTH_SCALE[bucket as usize]
            };
            proptest::prop_assert_eq!(color, expected);
        }

        #[test]
        fn strength_color_in_unit_range(strength in 0.0f64..=1.0) {
            let index = ((strength * 5.0).floor() as usize).min(5);
            proptest::prop_assert_eq!(strength_color(strength), STRENGTH_SCALE[index]);
        }
    }

    #[test]
    fn strength_color_non_finite_inputs() {
        assert_eq!(strength_color(f64::NEG_INFINITY), STRENGTH_SCALE[0]);
        assert_eq!(strength_color(f64::INFINITY), STRENGTH_SCALE[5]);
        assert_eq!(strength_color(-f64::NAN), STRENGTH_SCALE[0]);
    }
}
