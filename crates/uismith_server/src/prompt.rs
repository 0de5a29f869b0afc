//! Instruction prompt template for UI component generation.

/// Builds the instruction prompt sent to the provider.
///
/// The template demands a complete self-contained HTML document and embeds
/// the framework name and the user's request verbatim.
pub fn build_prompt(framework: &str, request: &str) -> String {
    format!(
        "Generate a complete {framework} UI component.\n\
         \n\
         Rules:\n\
         - Include <!DOCTYPE html>, <html>, <head>, <body>\n\
         - Include all CSS inside <style> or CDN\n\
         - Return ONLY raw HTML\n\
         - No markdown, no explanation\n\
         \n\
         User request:\n\
         {request}\n"
    )
}
