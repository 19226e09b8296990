// file: src/synthesis/messages.rs
// description: fixed and templated answer texts shown to the user
// reference: internal message catalog

use crate::models::Scope;

pub const OUT_OF_DOMAIN: &str = "I'm sorry, but your question doesn't appear to be related to Customer Data Platforms (CDPs). I can help with questions about Segment, mParticle, Lytics, or Zeotap. Please ask a CDP-related question.";

pub const NO_STEPS_FOUND: &str = "I couldn't find specific step-by-step instructions for this task. Please check the documentation links provided below or try to rephrase your question.";

/// Retrieval came back empty for the scope.
pub fn no_documents(query: &str, scope: Scope) -> String {
    let location = match scope {
        Scope::All => "CDP documentation".to_string(),
        Scope::Platform(platform) => format!("{} documentation", platform),
    };
    format!(
        "I couldn't find specific information about \"{}\" in the {}. Please try rephrasing your question or ask about a different topic.",
        query, location
    )
}

/// Documents were found but no sentence matched the question.
pub fn no_relevant_information(query: &str, scope: Scope) -> String {
    format!(
        "I couldn't find specific information about \"{}\" in the {} documentation. Please check the provided sources or try rephrasing your question.",
        query,
        scope.documentation_name()
    )
}

pub fn steps_lead_in(action: &str, scope: Scope) -> String {
    format!("Here's how to {} in {}:\n\n", action, scope.target_name())
}

pub fn typical_steps_lead_in(action: &str, scope: Scope) -> String {
    format!(
        "To {} in {}, you would typically:\n\n",
        action,
        scope.target_name()
    )
}

pub fn documentation_pointer(scope: Scope) -> String {
    format!(
        "\nFor more detailed information, please refer to the {} documentation.",
        scope.documentation_name()
    )
}

pub fn informational_attribution(scope: Scope) -> String {
    format!(
        "\n\nThis information is from the {} documentation. For more details, please refer to the provided sources.",
        scope.documentation_name()
    )
}

pub fn insufficient_comparison(feature: &str) -> String {
    format!(
        "I don't have enough information to compare the platforms regarding \"{}\". Please try asking about a different feature or check the documentation for more details.",
        feature
    )
}

pub fn comparison_lead_in(feature: &str) -> String {
    format!("Here's a comparison of {} across the CDP platforms:\n\n", feature)
}

pub fn comparison_caveat(feature: &str) -> String {
    format!(
        "When comparing these platforms for {}, it's important to consider your specific business needs and use cases. Each platform has its own strengths and approaches.",
        feature
    )
}
