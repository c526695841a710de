//! Plan upsell shown to accounts without the required subscription

use colored::Colorize;

const PLAN_TITLE: &str = "Healthcare Professional Plan";
const PLAN_TAGLINE: &str = "Unlock the full power of AI-assisted medical documentation";
const PLAN_PRICE: &str = "$29/month";
const PLAN_FEATURES: [&str; 4] = [
    "Unlimited consultation processing",
    "HIPAA-compliant security",
    "Priority AI processing",
    "24/7 professional support",
];

/// Fallback view rendered instead of the consultation form.
pub struct UpsellView;

impl UpsellView {
    /// Render the upsell page. `required_plan` is the plan id the account lacks.
    pub fn render(required_plan: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n", PLAN_TITLE.cyan().bold()));
        output.push_str(&format!("{}\n\n", PLAN_TAGLINE));
        output.push_str(&format!("  {}\n", PLAN_PRICE.blue().bold()));
        for feature in PLAN_FEATURES {
            output.push_str(&format!("  {} {}\n", "v".green(), feature));
        }
        output.push_str(&format!(
            "\n{} this account has no active '{}' plan. Subscribe to generate summaries.\n",
            "Note:".yellow().bold(),
            required_plan
        ));

        output
    }
}
