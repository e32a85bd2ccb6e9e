// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Black-box and property tests for axis layout.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use tickfit_axis::{
    Axis, AxisOrientation, CoordinateMapper, FixedLabelTicks, LayoutError, LinearMapper,
    LinearTicks, LogMapper, LogMinorTicks, LogTicks, Range, SubdivisionMinorTicks, TimeUnit,
    TimeUnitTicks,
};

fn at(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, day)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
}

/// Value order must agree with coordinate order; flipped for vertical axes.
fn assert_monotonic(values: &[f64], coords: &[f64], orientation: AxisOrientation) {
    assert_eq!(values.len(), coords.len());
    for (v, c) in values.windows(2).zip(coords.windows(2)) {
        if v[0] <= v[1] {
            match orientation {
                AxisOrientation::Horizontal => assert!(c[0] <= c[1], "{v:?} -> {c:?}"),
                AxisOrientation::Vertical => assert!(c[0] >= c[1], "{v:?} -> {c:?}"),
            }
        }
    }
}

#[test]
fn linear_axis_over_a_typical_range() {
    let mut axis = Axis::new(
        AxisOrientation::Horizontal,
        Range::new(0.0, 100.0).unwrap(),
        Some(400.0),
        None,
        LinearTicks::new(),
    )
    .unwrap();
    let layout = axis.compute_layout();
    let labels: Vec<&str> = layout.major_ticks.iter().map(|t| t.label_text()).collect();
    assert_eq!(
        labels,
        ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90", "100"]
    );
    assert_eq!(layout.major_label_sizes.len(), layout.major_ticks.len());
    assert_eq!(layout.size.width, 400.0);
    assert!(layout.size.height > 0.0);
}

#[test]
fn log_axis_with_minor_ticks() {
    let mut axis = Axis::new(
        AxisOrientation::Vertical,
        Range::new(1.0, 1000.0).unwrap(),
        None,
        Some(300.0),
        LogTicks::new(10.0),
    )
    .unwrap()
    .with_mapper(LogMapper::new(10.0))
    .with_minor_ticks(LogMinorTicks::new(10.0));
    let layout = axis.compute_layout();
    let majors: Vec<f64> = layout.major_ticks.iter().map(|t| t.value).collect();
    assert_eq!(majors, [1.0, 10.0, 100.0, 1000.0]);
    assert_eq!(layout.minor_ticks.len(), 3 * 8);
    assert!(layout.minor_ticks.iter().all(|t| t.label.is_none()));
    let minors: Vec<f64> = layout.minor_ticks.iter().map(|t| t.value).collect();
    assert_monotonic(&minors, &layout.minor_coords, AxisOrientation::Vertical);
}

#[test]
fn time_axis_ticks_stay_inside_the_range() {
    let range = Range::new(at(1, 0), at(3, 0)).unwrap();
    let mut axis = Axis::new(
        AxisOrientation::Horizontal,
        range,
        Some(600.0),
        None,
        TimeUnitTicks::new(TimeUnit::Hours),
    )
    .unwrap();
    let layout = axis.compute_layout();
    assert!(!layout.major_ticks.is_empty());
    assert!(layout.major_ticks.iter().all(|t| range.contains(&t.value)));
    assert!(layout.major_ticks.windows(2).all(|w| w[0].value < w[1].value));
    assert!(
        layout
            .major_coords
            .windows(2)
            .all(|w| w[0] < w[1])
    );
}

#[test]
fn long_time_axis_is_ticked_to_its_end() {
    let range = Range::new(at(1, 0), at(11, 0)).unwrap();
    let mut axis = Axis::new(
        AxisOrientation::Horizontal,
        range,
        Some(800.0),
        None,
        TimeUnitTicks::new(TimeUnit::Seconds),
    )
    .unwrap();
    let ticks = &axis.compute_layout().major_ticks;
    assert!(ticks.len() >= 2);
    let step = ticks[1].value - ticks[0].value;
    let last = ticks[ticks.len() - 1].value;
    assert!(*range.max() - last < step, "last tick {last} stops short");
}

#[test]
fn time_axis_point_range_has_one_tick() {
    let mut axis = Axis::new(
        AxisOrientation::Horizontal,
        Range::point(at(5, 12)),
        Some(600.0),
        None,
        TimeUnitTicks::new(TimeUnit::Days),
    )
    .unwrap();
    let layout = axis.compute_layout();
    assert_eq!(layout.major_ticks.len(), 1);
    assert_eq!(layout.major_ticks[0].value, at(5, 12));
}

#[test]
fn fixed_label_axis_updates_with_the_range() {
    let mut axis = Axis::new(
        AxisOrientation::Horizontal,
        Range::new(0.0, 11.0).unwrap(),
        Some(600.0),
        None,
        FixedLabelTicks::new(
            ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
                .into_iter()
                .enumerate()
                .map(|(i, m)| (i as f64, m)),
        ),
    )
    .unwrap();
    assert_eq!(axis.compute_layout().major_ticks.len(), 12);

    let layout = axis
        .update(Range::new(2.5, 5.0).unwrap(), Some(600.0), None)
        .unwrap();
    let labels: Vec<&str> = layout.major_ticks.iter().map(|t| t.label_text()).collect();
    assert_eq!(labels, ["Apr", "May", "Jun"]);
    assert_eq!(layout.major_ticks[0].index, 0);
}

#[test]
fn update_rejects_a_missing_mapped_extent() {
    let mut axis = Axis::new(
        AxisOrientation::Vertical,
        Range::new(0.0, 1.0).unwrap(),
        None,
        Some(100.0),
        LinearTicks::new(),
    )
    .unwrap();
    let err = axis
        .update(Range::new(0.0, 2.0).unwrap(), Some(50.0), None)
        .unwrap_err();
    assert!(matches!(err, LayoutError::MissingExtent { .. }));
    assert_eq!(err.to_string(), "vertical axis requires an explicit height");
}

#[test]
fn inverted_range_is_rejected() {
    assert_eq!(Range::new(3.0, 1.0), Err(LayoutError::InvertedRange));
}

proptest! {
    #[test]
    fn linear_mapper_preserves_order(
        min in -1.0e6_f64..1.0e6,
        span in 1.0e-3_f64..1.0e6,
        a in 0.0_f64..1.0,
        b in 0.0_f64..1.0,
        extent in 1.0_f64..4000.0,
    ) {
        let range = Range::new(min, min + span).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo, hi) = (min + lo * span, min + hi * span);
        prop_assert!(
            LinearMapper.to_screen(lo, &range, extent) <= LinearMapper.to_screen(hi, &range, extent)
        );
    }

    #[test]
    fn log_mapper_preserves_order(
        min_exp in -6.0_f64..6.0,
        decades in 0.1_f64..8.0,
        a in 0.0_f64..1.0,
        b in 0.0_f64..1.0,
    ) {
        let mapper = LogMapper::new(10.0);
        let (min, max) = (10_f64.powf(min_exp), 10_f64.powf(min_exp + decades));
        let range = Range::new(min, max).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (lo, hi) = (min + lo * (max - min), min + hi * (max - min));
        prop_assert!(mapper.to_screen(lo, &range, 500.0) <= mapper.to_screen(hi, &range, 500.0));
    }

    #[test]
    fn linear_layout_orders_ticks_along_the_axis(
        min in -1.0e4_f64..1.0e4,
        span in 1.0e-2_f64..1.0e5,
        extent in 80.0_f64..2000.0,
        vertical in any::<bool>(),
    ) {
        let orientation = if vertical {
            AxisOrientation::Vertical
        } else {
            AxisOrientation::Horizontal
        };
        let range = Range::new(min, min + span).unwrap();
        let mut axis = Axis::new(orientation, range, Some(extent), Some(extent), LinearTicks::new())
            .unwrap()
            .with_minor_ticks(SubdivisionMinorTicks::new(5));
        let layout = axis.compute_layout().clone();

        let majors: Vec<f64> = layout.major_ticks.iter().map(|t| t.value).collect();
        let minors: Vec<f64> = layout.minor_ticks.iter().map(|t| t.value).collect();
        assert_monotonic(&majors, &layout.major_coords, orientation);
        assert_monotonic(&minors, &layout.minor_coords, orientation);
        let slack = span * 1.0e-6;
        prop_assert!(majors.iter().all(|&v| v >= min - slack && v <= min + span + slack));
        prop_assert!(layout.major_ticks.iter().enumerate().all(|(i, t)| t.index == i));

        prop_assert_eq!(axis.compute_layout(), &layout);
    }

    #[test]
    fn point_ranges_yield_one_tick(value in -1.0e6_f64..1.0e6) {
        let mut axis = Axis::new(
            AxisOrientation::Horizontal,
            Range::point(value),
            Some(300.0),
            None,
            LinearTicks::new(),
        )
        .unwrap();
        let layout = axis.compute_layout();
        prop_assert_eq!(layout.major_ticks.len(), 1);
        prop_assert_eq!(layout.major_ticks[0].value, value);
    }
}
