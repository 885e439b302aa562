use selfsense_core::models::{Assessment, RiskTier};

/// Plain-text summary of an assessment for terminal output.
pub fn render_report(assessment: &Assessment) -> String {
    let mut output = format!("## {}\n\n", assessment.condition_name);
    output.push_str(&format!(
        "{}: {} (score {}/{})\n\n",
        assessment.tier().headline(),
        assessment.risk_level,
        assessment.total_score,
        assessment.max_possible_score,
    ));
    output.push_str(&assessment.message);
    output.push('\n');

    if !assessment.risk_factors.is_empty() {
        output.push_str("\n### Risk factors\n");
        for factor in &assessment.risk_factors {
            output.push_str(&format!(
                "- [{}] {}\n  {}\n",
                factor.severity.as_str(),
                factor.question,
                factor.answer
            ));
        }
    }

    if assessment.tier() != RiskTier::Low {
        output.push_str("\nConsider booking a consultation to discuss these results.\n");
    }
    output
}
