//! Property-based tests for timecode values.
//!
//! Uses proptest to verify round-trip correctness of the field, frame-count,
//! and string representations, the drop-frame label exclusions, and the
//! algebraic laws of timecode arithmetic.

use proptest::prelude::*;
use framecode_core::{dropframe, parse_timecode, FpsFormat, Timecode, TimecodeError};

fn any_real_format() -> impl Strategy<Value = FpsFormat> {
    prop_oneof![
        Just(FpsFormat::Fps24),
        Just(FpsFormat::Fps25),
        Just(FpsFormat::Fps30),
        Just(FpsFormat::Fps29_97),
        Just(FpsFormat::Fps29_97Df),
        Just(FpsFormat::Fps60),
    ]
}

/// Valid field tuples: in-range values with drop-frame exclusions applied.
fn any_fields() -> impl Strategy<Value = (u32, u8, u8, u8, FpsFormat)> {
    any_real_format()
        .prop_flat_map(|format| {
            let fps = format.to_int() as u8;
            (0u32..24, 0u8..60, 0u8..60, 0u8..fps)
                .prop_map(move |(h, m, s, f)| (h, m, s, f, format))
        })
        .prop_filter("label must exist on the drop-frame timeline", |(_, m, s, f, format)| {
            !(format.is_drop_frame() && dropframe::is_dropped_label(*m, *s, *f))
        })
}

fn frames_per_day(format: FpsFormat) -> i64 {
    if format.is_drop_frame() {
        dropframe::FRAMES_PER_DAY
    } else {
        i64::from(format.to_int()) * 86_400
    }
}

/// A format paired with a 24-hour-window frame count.
fn any_frame_count() -> impl Strategy<Value = (i64, FpsFormat)> {
    any_real_format().prop_flat_map(|format| {
        (0..frames_per_day(format)).prop_map(move |n| (n, format))
    })
}

proptest! {
    /// Decomposing a field-constructed timecode yields the fields back,
    /// with a zero rollover counter.
    #[test]
    fn roundtrip_fields((h, m, s, f, format) in any_fields()) {
        let tc = Timecode::new(h, m, s, f, format).unwrap();
        prop_assert_eq!(tc.decompose(), (h, m, s, f, format, 0));
    }

    /// Within a 24-hour window, the total-frame count inverts exactly.
    #[test]
    fn roundtrip_frame_count((n, format) in any_frame_count()) {
        let tc = Timecode::from_frame_count(n, format).unwrap();
        prop_assert_eq!(tc.total_frames(), n);
        prop_assert_eq!(tc.rollover(), 0);
    }

    /// Signed counts outside the window still invert exactly.
    #[test]
    fn roundtrip_signed_frame_count(n in -10_000_000i64..10_000_000, format in any_real_format()) {
        let tc = Timecode::from_frame_count(n, format).unwrap();
        prop_assert_eq!(tc.total_frames(), n);
    }

    /// Decomposition never produces a label skipped by the drop-frame
    /// convention, and the frames field never reaches the nominal fps.
    #[test]
    fn decomposition_respects_label_rules((n, format) in any_frame_count()) {
        let tc = Timecode::from_frame_count(n, format).unwrap();
        prop_assert!(u32::from(tc.frames()) < format.to_int());
        if format.is_drop_frame() {
            prop_assert!(
                !dropframe::is_dropped_label(tc.minutes(), tc.seconds(), tc.frames()),
                "count {} decomposed to dropped label {}", n, tc
            );
        }
    }

    /// Explicit-format parsing inverts formatting for every constructible
    /// value.
    #[test]
    fn roundtrip_string_explicit_format((h, m, s, f, format) in any_fields()) {
        let tc = Timecode::new(h, m, s, f, format).unwrap();
        let parsed = parse_timecode(&tc.to_string(), format).unwrap();
        prop_assert_eq!(parsed, tc);
    }

    /// Separator-based inference inverts formatting when the fields fit
    /// the inferred format: `;` always infers the drop-frame format, and
    /// `:` infers the process default when the frames field admits it.
    #[test]
    fn roundtrip_string_inferred_format(h in 0u32..24, m in 0u8..60, s in 0u8..60, f in 0u8..25) {
        let tc = Timecode::new(h, m, s, f, FpsFormat::Fps25).unwrap();
        prop_assert_eq!(tc.to_string().parse::<Timecode>().unwrap(), tc);

        if !dropframe::is_dropped_label(m, s, f) {
            let df = Timecode::new(h, m, s, f, FpsFormat::Fps29_97Df).unwrap();
            prop_assert_eq!(df.to_string().parse::<Timecode>().unwrap(), df);
        }
    }

    /// Same-format addition is commutative and associative.
    #[test]
    fn add_is_commutative_and_associative(
        (a, format) in any_frame_count(),
        b in 0i64..1_000_000,
        c in 0i64..1_000_000,
    ) {
        let ta = Timecode::from_frame_count(a, format).unwrap();
        let tb = Timecode::from_frame_count(b, format).unwrap();
        let tc = Timecode::from_frame_count(c, format).unwrap();

        prop_assert_eq!(ta.add(&tb).unwrap(), tb.add(&ta).unwrap());
        prop_assert_eq!(
            ta.add(&tb).unwrap().add(&tc).unwrap(),
            ta.add(&tb.add(&tc).unwrap()).unwrap()
        );
    }

    /// Subtraction inverts addition.
    #[test]
    fn sub_inverts_add((a, format) in any_frame_count(), b in 0i64..1_000_000) {
        let ta = Timecode::from_frame_count(a, format).unwrap();
        let tb = Timecode::from_frame_count(b, format).unwrap();
        prop_assert_eq!(ta.add(&tb).unwrap().sub(&tb).unwrap(), ta);
        prop_assert_eq!(ta.add_frames(b).unwrap().sub_frames(b).unwrap(), ta);
    }

    /// Cross-format arithmetic and comparison always fail with a format
    /// mismatch.
    #[test]
    fn cross_format_operations_mismatch(
        (a, left) in any_frame_count(),
        (b, right) in any_frame_count(),
    ) {
        prop_assume!(left != right);
        let ta = Timecode::from_frame_count(a, left).unwrap();
        let tb = Timecode::from_frame_count(b, right).unwrap();

        let added = matches!(ta.add(&tb), Err(TimecodeError::FormatMismatch { .. }));
        prop_assert!(added, "cross-format add must mismatch");
        let compared = matches!(ta.compare(&tb), Err(TimecodeError::FormatMismatch { .. }));
        prop_assert!(compared, "cross-format compare must mismatch");
        prop_assert_eq!(ta.partial_cmp(&tb), None);
    }

    /// Constructing frames == nominal fps fails naming the frames field.
    #[test]
    fn frame_at_nominal_fps_rejected(format in any_real_format(), h in 0u32..24) {
        let fps = format.to_int() as u8;
        let result = Timecode::new(h, 0, 30, fps, format);
        let rejected = matches!(
            result,
            Err(TimecodeError::OutOfRangeField { ref field, .. }) if field == "frames"
        );
        prop_assert!(rejected, "frame at nominal fps must name the frames field");
    }

    /// Stepping one frame at a time agrees with direct decomposition.
    #[test]
    fn successor_agrees_with_decomposition((n, format) in any_frame_count()) {
        let tc = Timecode::from_frame_count(n, format).unwrap();
        let next = tc.add_frames(1).unwrap();
        let direct = Timecode::from_frame_count(n + 1, format).unwrap();
        prop_assert_eq!(next, direct);
        prop_assert_eq!(next.to_string(), direct.to_string());
    }

    /// Comparison agrees with the order of the underlying counts.
    #[test]
    fn compare_agrees_with_frame_counts(
        (a, format) in any_frame_count(),
        b in 0i64..2_000_000,
    ) {
        let ta = Timecode::from_frame_count(a, format).unwrap();
        let tb = Timecode::from_frame_count(b, format).unwrap();
        prop_assert_eq!(ta.compare(&tb).unwrap(), a.cmp(&b));
    }
}

/// Every count in a full drop-frame day roundtrips exactly, never lands
/// on a skipped label, and agrees with single-frame stepping.
#[test]
fn dropframe_full_day_exhaustive() {
    let format = FpsFormat::Fps29_97Df;
    let mut tc = Timecode::zero(format);
    for count in 0..dropframe::FRAMES_PER_DAY {
        assert_eq!(tc.total_frames(), count, "count {count} failed roundtrip");
        assert!(
            !dropframe::is_dropped_label(tc.minutes(), tc.seconds(), tc.frames()),
            "count {count} decomposed to dropped label {tc}"
        );
        assert_eq!(tc, Timecode::from_frame_count(count, format).unwrap());
        tc = tc.add_frames(1).unwrap();
    }
    assert_eq!(tc.rollover(), 1);
    assert_eq!(tc.to_string(), "00:00:00;00");
}

#[test]
fn two_hours_at_25_fps() {
    let tc = Timecode::from_frame_count(2 * 3600 * 25, FpsFormat::Fps25).unwrap();
    assert_eq!(tc.to_string(), "02:00:00:00");
}

#[test]
fn drop_frame_skip_scenarios() {
    // The value after 00:00:59;29 skips labels ;00 and ;01.
    let tc = parse_timecode("00:00:59;29", FpsFormat::Fps29_97Df).unwrap();
    assert_eq!(tc.add_frames(1).unwrap().to_string(), "00:01:00;02");

    // Minute 10 is exempt, so no labels are skipped there.
    let tc = parse_timecode("00:09:59;29", FpsFormat::Fps29_97Df).unwrap();
    assert_eq!(tc.add_frames(1).unwrap().to_string(), "00:10:00;00");

    // And the predecessor of 00:01:00;02 lands back on 00:00:59;29.
    let tc = parse_timecode("00:01:00;02", FpsFormat::Fps29_97Df).unwrap();
    assert_eq!(tc.sub_frames(1).unwrap().to_string(), "00:00:59;29");
}
