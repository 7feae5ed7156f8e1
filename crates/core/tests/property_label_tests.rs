use flame_view_core::LabelFitter;
use flame_view_core::label::{ELLIPSIS, fit_label};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fitting_is_idempotent(
        label in "\\PC{0,60}",
        available in 0.0f64..800.0,
        avg in 1.0f64..20.0,
        margin in 2usize..=5,
    ) {
        let fitter = LabelFitter::new(avg, margin).expect("fitter");
        let once = fitter.fit(&label, available);
        let twice = fitter.fit(&once, available);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn empty_label_stays_empty(available in -100.0f64..2_000.0, avg in 0.5f64..30.0) {
        prop_assert_eq!(fit_label("", available, avg).expect("fit"), "");
    }

    #[test]
    fn fitted_text_fits_or_is_unchanged(
        label in "[a-z_:]{0,80}",
        available in 0.0f64..600.0,
        avg in 2.0f64..12.0,
    ) {
        let fitted = fit_label(&label, available, avg).expect("fit");
        let chars = fitted.chars().count() as f64;
        prop_assert!(chars * avg <= available || fitted.is_empty());
        if fitted != label && !fitted.is_empty() {
            prop_assert!(fitted.ends_with(ELLIPSIS));
            let kept = fitted.trim_end_matches(ELLIPSIS);
            prop_assert!(label.starts_with(kept));
        }
    }
}
