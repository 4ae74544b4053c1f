//! Prompt construction and response decoration for research operations.

use research_types::Operation;

pub const NO_VALID_RESPONSE: &str = "Sorry, I couldn't generate a valid response.";

fn instruction(operation: Operation) -> &'static str {
    match operation {
        Operation::Summarize => {
            "Summarize the following research in a concise and structured manner, including key objectives, methodology, and conclusions."
        }
        Operation::Suggest => {
            "Provide recommendations and suggestions for further research based on the following content."
        }
        Operation::Analyze => {
            "Critically analyze the following research, highlighting strengths, weaknesses, and implications."
        }
    }
}

/// Instruction for the operation, a blank line, then the content
pub fn build_prompt(operation: Operation, content: &str) -> String {
    format!("{}\n\n{}", instruction(operation), content)
}

/// Wrap model output in the friendly envelope shown to the user
pub fn format_response(raw_text: &str) -> String {
    format!(
        "✨ Here’s what I found: \n\n{}\n\n💡 Let me know if you need more details!",
        raw_text
    )
}
