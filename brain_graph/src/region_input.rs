use crate::dataset::RegionId;

/// Highest selectable region index (the dataset holds 3446 regions).
pub const MAX_REGION_INDEX: RegionId = 3445;

/// Clamp a raw value into `[0, MAX_REGION_INDEX]`.
pub fn clamp_region(value: i64) -> RegionId {
    clamp_region_to(value, MAX_REGION_INDEX)
}

pub fn clamp_region_to(value: i64, max: RegionId) -> RegionId {
    value.clamp(0, i64::from(max)) as RegionId
}

/// Coerce the text of the numeric input field.
///
/// Empty input counts as 0, integers parse directly and finite decimals
/// truncate toward zero. Anything else is coerced to 0.
pub fn parse_region_input(text: &str) -> i64 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    if let Ok(v) = text.parse::<i64>() {
        return v;
    }
    match text.parse::<f64>() {
        // saturating cast for values beyond i64
        Ok(v) if v.is_finite() => v.trunc() as i64,
        _ => {
            tracing::warn!(input = text, "Failed to parse region index, using 0");
            0
        }
    }
}

/// Uncommitted field value plus the committed selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionForm {
    input: i64,
    selected: RegionId,
    max: RegionId,
}

impl Default for RegionForm {
    fn default() -> Self {
        Self::new(0)
    }
}

impl RegionForm {
    pub fn new(selected: RegionId) -> Self {
        Self::with_max(selected, MAX_REGION_INDEX)
    }

    pub fn with_max(selected: RegionId, max: RegionId) -> Self {
        let selected = selected.min(max);
        Self {
            input: i64::from(selected),
            selected,
            max,
        }
    }

    pub fn input(&self) -> i64 {
        self.input
    }

    pub fn selected(&self) -> RegionId {
        self.selected
    }

    /// Update the uncommitted value only.
    pub fn set_input(&mut self, text: &str) {
        self.input = parse_region_input(text);
    }

    /// Commit the clamped input as the new selection.
    pub fn submit(&mut self) -> RegionId {
        self.selected = clamp_region_to(self.input, self.max);
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_range() {
        assert_eq!(clamp_region(-5), 0);
        assert_eq!(clamp_region(0), 0);
        assert_eq!(clamp_region(1200), 1200);
        assert_eq!(clamp_region(3445), 3445);
        assert_eq!(clamp_region(3446), 3445);
        assert_eq!(clamp_region(i64::MAX), 3445);
        assert_eq!(clamp_region(i64::MIN), 0);
    }

    #[test]
    fn input_coercion() {
        assert_eq!(parse_region_input(""), 0);
        assert_eq!(parse_region_input("   "), 0);
        assert_eq!(parse_region_input("42"), 42);
        assert_eq!(parse_region_input(" 17 "), 17);
        assert_eq!(parse_region_input("-3"), -3);
        assert_eq!(parse_region_input("12.9"), 12);
        assert_eq!(parse_region_input("-0.5"), 0);
        assert_eq!(parse_region_input("1e3"), 1000);
        assert_eq!(parse_region_input("abc"), 0);
        assert_eq!(parse_region_input("NaN"), 0);
        assert_eq!(parse_region_input("inf"), 0);
        assert_eq!(parse_region_input("1e30"), i64::MAX);
    }

    #[test]
    fn set_input_does_not_commit() {
        let mut form = RegionForm::default();
        form.set_input("250");
        assert_eq!(form.input(), 250);
        assert_eq!(form.selected(), 0);
        assert_eq!(form.submit(), 250);
        assert_eq!(form.selected(), 250);
    }

    #[test]
    fn submit_clamps_out_of_range() {
        let mut form = RegionForm::new(10);
        form.set_input("99999");
        assert_eq!(form.submit(), MAX_REGION_INDEX);
        form.set_input("-7");
        assert_eq!(form.submit(), 0);
        form.set_input("garbage");
        assert_eq!(form.submit(), 0);
    }

    #[test]
    fn custom_bound() {
        let mut form = RegionForm::with_max(50, 9);
        assert_eq!(form.selected(), 9);
        form.set_input("12");
        assert_eq!(form.submit(), 9);
        assert_eq!(clamp_region_to(-1, 9), 0);
    }

    proptest::proptest! {
        #[test]
        fn clamp_matches_bounds(v in proptest::prelude::any::<i64>()) {
            let r = clamp_region(v);
            proptest::prop_assert_eq!(i64::from(r), v.clamp(0, 3445));
        }

        #[test]
        fn submit_commits_clamped_integer(v in proptest::prelude::any::<i64>()) {
            let mut form = RegionForm::new(0);
            form.set_input(&v.to_string());
            proptest::prop_assert_eq!(form.input(), v);
            proptest::prop_assert_eq!(form.submit(), clamp_region(v));
        }
    }
}
