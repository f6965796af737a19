//! Plain-text summary rendering for console output.

use relguard_types::ReportEnvelope;

pub fn render_summary(report: &ReportEnvelope) -> String {
    let mut out = String::new();

    for outcome in &report.scenarios {
        if outcome.result.allowed {
            out.push_str(&format!("{}: ALLOWED\n", outcome.scenario));
        } else {
            out.push_str(&format!(
                "{}: DENIED ({} violations)\n",
                outcome.scenario,
                outcome.result.violations.len()
            ));
            for (i, violation) in outcome.result.violations.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, violation));
            }
        }
    }

    out.push_str(&format!(
        "summary: {} total, {} passed, {} failed\n",
        report.summary.total, report.summary.passed, report.summary.failed
    ));
    out
}
