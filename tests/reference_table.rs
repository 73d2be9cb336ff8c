//! Checks conversions against a table of named sRGB colors whose OKLCH coordinates were worked out
//! independently in double precision.

extern crate csv;
extern crate oklch;
extern crate serde;
#[macro_use]
extern crate serde_derive;

use oklch::prelude::*;

const TABLE: &str = include_str!("data/srgb_oklch.csv");

#[derive(Debug, Deserialize)]
struct Row {
    name: String,
    r: u8,
    g: u8,
    b: u8,
    lightness: f32,
    chroma: f32,
    hue: f32,
}

impl Row {
    fn rgb(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.,
            self.g as f32 / 255.,
            self.b as f32 / 255.,
        )
    }
    fn expected(&self) -> OKLCHColor {
        OKLCHColor::new(self.lightness, self.chroma, self.hue)
    }
}

fn rows() -> Vec<Row> {
    let mut reader = csv::Reader::from_reader(TABLE.as_bytes());
    reader
        .deserialize()
        .collect::<Result<Vec<Row>, csv::Error>>()
        .expect("reference table is well-formed")
}

#[test]
fn table_is_not_empty() {
    assert_eq!(rows().len(), 20);
}

#[test]
fn srgb_to_oklch_matches_table() {
    for row in rows() {
        let (r, g, b) = row.rgb();
        let actual = OKLCHColor::from_rgb(r, g, b);
        let expected = row.expected();
        assert!(
            (actual.lightness - expected.lightness).abs() <= 1e-4,
            "{}: lightness {} != {}",
            row.name,
            actual.lightness,
            expected.lightness
        );
        assert!(
            (actual.chroma - expected.chroma).abs() <= 1e-4,
            "{}: chroma {} != {}",
            row.name,
            actual.chroma,
            expected.chroma
        );
        // hue is meaningless for grays, so compare positions in OKLab instead of raw angles
        assert!(
            actual.difference(&expected) <= 1e-4,
            "{}: {:?} is too far from {:?}",
            row.name,
            actual,
            expected
        );
    }
}

#[test]
fn oklch_to_srgb_matches_table() {
    for row in rows() {
        let (r, g, b) = row.expected().to_srgb();
        let (er, eg, eb) = row.rgb();
        assert!(
            (r - er).abs() <= 1e-4 && (g - eg).abs() <= 1e-4 && (b - eb).abs() <= 1e-4,
            "{}: ({}, {}, {}) != ({}, {}, {})",
            row.name,
            r,
            g,
            b,
            er,
            eg,
            eb
        );
    }
}

#[test]
fn lab_and_lch_agree_on_difference() {
    let table = rows();
    for a in &table {
        for b in &table {
            let lch_a = a.expected();
            let lch_b = b.expected();
            let lab_a: OKLABColor = lch_a.convert();
            let lab_b: OKLABColor = lch_b.convert();
            assert_eq!(lch_a.difference(&lch_b), lab_a.euclidean_distance(&lab_b));
        }
    }
}
