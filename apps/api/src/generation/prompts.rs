// All LLM prompt constants for the portfolio generation module.

/// System prompt for portfolio generation — enforces JSON-only output.
pub const PORTFOLIO_SYSTEM: &str =
    "You are an expert web developer specializing in creating modern, \
    single-page portfolio websites. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Portfolio generation prompt template.
/// Replace `{resume_text}` and `{custom_instructions_block}` before sending.
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"A user has uploaded their resume. Generate the complete HTML, CSS, and JavaScript code for a visually appealing and responsive static portfolio website based on this resume.

Resume Text:
"""
{resume_text}
"""
{custom_instructions_block}
Requirements:
1. HTML: Create a semantic HTML structure. Include sections for:
   - Header (Name, Title)
   - Contact Information (Email, Phone, LinkedIn, GitHub - if available in resume)
   - Summary/About Me
   - Experience (Job title, Company, Period, Description for each role)
   - Education (Degree, Institution, Period for each)
   - Skills (List of skills)
   - Projects (if any indication in resume, otherwise omit or add a placeholder)
2. CSS: Give the website a modern look with rounded corners and modern typography such as Lato/sans-serif fonts. Implement subtle animations for transitions and interactions, and ensure responsive design for mobile and desktop devices.
3. JavaScript: Add subtle interactivity if it enhances the portfolio (e.g., smooth scrolling, simple animations). If no JS is needed, provide an empty string.

Output Format:
Return the generated code as a JSON object with exactly three keys: "html", "css", and "js".
The "html" key must contain the full HTML document string, including <!DOCTYPE html>, <html>, <head> (with a <title> and a link to style.css), and <body>.
The "css" key must contain the CSS code string, complete and ready to save as style.css.
The "js" key must contain the JavaScript code string, ready to save as script.js.

Example of the expected JSON output structure:
{
  "html": "<!DOCTYPE html>...</html>",
  "css": "body { ... }",
  "js": "console.log('loaded');"
}

Focus on creating a high-quality, modern, and professional-looking portfolio. Make reasonable assumptions if some details are not explicitly in the resume text but are common for portfolios. Do not include any explanations or conversational text outside the JSON object."#;

/// Custom-instructions block, inserted into the prompt only when the user
/// supplied instructions. Replace `{custom_instructions}`.
pub const CUSTOM_INSTRUCTIONS_TEMPLATE: &str = r#"
Custom Instructions from User:
"""
{custom_instructions}
"""
"#;
