//! Report formatting for the terminal and for machine consumers.

use std::fmt::Write as _;

use beam_core::{AnalysisResults, AnalysisSettings, LoadSet, Reactions, SamplePoint};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// JSON envelope written by `beam analyze --format json`
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub settings: AnalysisSettings,
    #[serde(flatten)]
    pub results: &'a AnalysisResults,
}

impl<'a> Report<'a> {
    pub fn new(request_id: Uuid, settings: AnalysisSettings, results: &'a AnalysisResults) -> Self {
        Report {
            request_id,
            generated_at: Utc::now(),
            settings,
            results,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const RULE: &str = "═══════════════════════════════════════";

/// Summary of the inputs, as printed above every result block
pub fn describe_loads(load_set: &LoadSet) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Span:        {:.3} m", load_set.length_m());
    if load_set.point_loads().is_empty() {
        let _ = writeln!(out, "  Point loads: none");
    } else {
        let _ = writeln!(out, "  Point loads:");
        for (i, load) in load_set.point_loads().iter().enumerate() {
            let _ = writeln!(
                out,
                "    [{i}] {:>9.3} kN at {:.3} m",
                load.magnitude_kn(),
                load.position_m()
            );
        }
    }
    let udl = load_set.udl();
    if udl.is_empty() {
        let _ = writeln!(out, "  UDL:         none");
    } else {
        let _ = writeln!(
            out,
            "  UDL:         {:.3} kN/m from {:.3} m to {:.3} m (W = {:.3} kN)",
            udl.intensity_kn_per_m(),
            udl.start_m(),
            udl.end_m(),
            udl.resultant_kn()
        );
    }
    out
}

/// Reactions block for `beam reactions`
pub fn reactions_text(load_set: &LoadSet, reactions: &Reactions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "  SUPPORT REACTIONS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out);
    out.push_str(&describe_loads(load_set));
    let _ = writeln!(out);
    let _ = writeln!(out, "Reactions (positive upward):");
    let _ = writeln!(out, "  RA (x = 0):  {:.4} kN", reactions.left_kn);
    let _ = writeln!(out, "  RB (x = L):  {:.4} kN", reactions.right_kn);
    let _ = writeln!(out);
    let _ = writeln!(out, "Check:");
    let _ = writeln!(out, "  RA + RB      = {:.4} kN", reactions.total_kn());
    let _ = writeln!(out, "  Total load   = {:.4} kN", load_set.total_vertical_load_kn());
    out
}

/// Full text report for `beam analyze --format table`
pub fn table(load_set: &LoadSet, results: &AnalysisResults) -> String {
    let mut out = reactions_text(load_set, &results.reactions);
    let s = &results.summary;
    let _ = writeln!(out);
    let _ = writeln!(out, "Extremes:");
    let _ = writeln!(out, "  |V|max = {:.4} kN at {:.4} m", s.max_shear_kn, s.max_shear_position_m);
    let _ = writeln!(out, "  M_max  = {:.4} kNm at {:.4} m", s.max_moment_knm, s.max_moment_position_m);
    let _ = writeln!(out, "  M_min  = {:.4} kNm at {:.4} m", s.min_moment_knm, s.min_moment_position_m);
    let _ = writeln!(out);
    out.push_str(&sample_rows(&results.samples));
    let _ = writeln!(out, "{RULE}");
    out
}

fn sample_rows(samples: &[SamplePoint]) -> String {
    let mut out = String::with_capacity(40 * (samples.len() + 2));
    let _ = writeln!(out, "{:>12} {:>14} {:>14}", "x (m)", "V (kN)", "M (kNm)");
    for s in samples {
        let _ = writeln!(out, "{:>12.4} {:>14.4} {:>14.4}", s.x_m, s.shear_kn, s.moment_knm);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use beam_core::analyze_with;

    fn midspan() -> LoadSet {
        LoadSet::builder(10.0).point_load(5.0, 10.0).build().unwrap()
    }

    #[test]
    fn test_report_envelope() {
        let loads = midspan();
        let settings = AnalysisSettings::default().with_sample_count(11);
        let results = analyze_with(&loads, &settings).unwrap();
        let id = Uuid::new_v4();

        let json = Report::new(id, settings, &results).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["request_id"], id.to_string());
        assert!(value["generated_at"].is_string());
        assert_eq!(value["settings"]["sampling"]["sample_count"], 11);
        assert_eq!(value["reactions"]["left_kn"], 5.0);
        assert_eq!(value["summary"]["max_moment_knm"], 25.0);
        assert_eq!(value["samples"].as_array().unwrap().len(), results.samples.len());
    }

    #[test]
    fn test_reactions_text() {
        let loads = LoadSet::builder(10.0).point_load(3.0, 10.0).udl(2.0, 0.0, 10.0).build().unwrap();
        let text = reactions_text(&loads, &beam_core::calculations::solve_reactions(&loads));
        assert!(text.contains("RA (x = 0):  17.0000 kN"));
        assert!(text.contains("RB (x = L):  13.0000 kN"));
        assert!(text.contains("Total load   = 30.0000 kN"));
        assert!(text.contains("[0]    10.000 kN at 3.000 m"));
        assert!(text.contains("W = 20.000 kN"));
    }

    #[test]
    fn test_table_lists_every_sample() {
        let loads = midspan();
        let results = analyze_with(&loads, &AnalysisSettings::default()).unwrap();
        let text = table(&loads, &results);
        assert!(text.contains("UDL:         none"));
        // 100 grid points miss midspan; the peak comes from the samples injected either side
        assert!(text.contains("M_max  = 24.9950 kNm at"));
        let rows = text.lines().filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit())).count();
        assert_eq!(rows, results.samples.len());
    }
}
