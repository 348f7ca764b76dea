use std::collections::HashMap;

use log::debug;

use crate::errors::{ CaseGenError, CaseGenResult };
use crate::implementations::config::GeneratorConfig;

pub const SYSTEM_TEMPLATE: &str = "system";
pub const GENERATION_TEMPLATE: &str = "generation";
pub const REFINEMENT_TEMPLATE: &str = "refinement";

const SYSTEM_PROMPT: &str =
    r#"
You are a helpful Quality Assurance test-case generation assistant.
Given a requirement or user story, produce well-structured functional test cases.
Each test case must include:
- Test Case ID
- Title
- Preconditions
- Test Steps (numbered)
- Expected Results (matching each step where relevant)
- Priority (High/Medium/Low)
- Test Type (Functional/Integration/Regression/Smoke)
- Acceptance Criteria matched (as a list of strings)
- Notes (optional)
Return the output in JSON array format ONLY. Example:
[
  {
    "id": "TC-001",
    "title": "Login with valid credentials",
    "preconditions": ["User must be registered"],
    "steps": ["Go to login page", "Enter valid email", "Enter valid password", "Click Login"],
    "expected_results": ["Login page loads", "Email entered", "Password entered", "User is redirected to dashboard"],
    "priority": "High",
    "type": "Functional",
    "acceptance_criteria": ["User can log in successfully", "Dashboard is displayed"],
    "notes": ""
  }
]
"#;

const GENERATION_PROMPT: &str =
    r#"
Requirement:
{{requirement_text}}

Instructions:
1. Read the requirement above carefully.
2. Generate comprehensive functional test cases that cover positive, negative and edge scenarios where applicable.
3. Make test case IDs sequential starting at TC-001 for this run.
4. For each test case include fields exactly as specified in the SYSTEM_PROMPT.
5. Output must be valid JSON (an array of test case objects). No extra commentary.
"#;

const REFINEMENT_PROMPT: &str =
    "Please produce a corrected/expanded set of test cases according to the JSON below. \
If you can improve coverage, add more test cases. Only return a JSON array of test cases.\n\n\
User JSON edits:\n{{edited_json}}";

/// Built-in templates, used when the config file does not override them
pub fn default_templates() -> HashMap<String, String> {
    let mut templates = HashMap::new();
    templates.insert(SYSTEM_TEMPLATE.to_string(), SYSTEM_PROMPT.to_string());
    templates.insert(GENERATION_TEMPLATE.to_string(), GENERATION_PROMPT.to_string());
    templates.insert(REFINEMENT_TEMPLATE.to_string(), REFINEMENT_PROMPT.to_string());
    templates
}

/// Render a template with the given parameters
pub fn render_template(
    config: &GeneratorConfig,
    template_name: &str,
    params: &HashMap<String, String>
) -> CaseGenResult<String> {
    let template = config
        .get_template(template_name)
        .ok_or_else(|| CaseGenError::TemplateError(format!("Template not found: {}", template_name)))?;

    let mut result = template;
    for (key, value) in params {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    Ok(result)
}

/// Combine the system prompt and the generation template with the requirement
/// and optional extra instructions.
pub fn build_generation_prompt(
    config: &GeneratorConfig,
    requirement: &str,
    additional_instructions: &str
) -> CaseGenResult<String> {
    let system = render_template(config, SYSTEM_TEMPLATE, &HashMap::new())?;

    let mut params = HashMap::new();
    params.insert("requirement_text".to_string(), requirement.to_string());
    let mut body = render_template(config, GENERATION_TEMPLATE, &params)?;

    if !additional_instructions.is_empty() {
        body.push_str("\n\nAdditional instructions:\n");
        body.push_str(additional_instructions);
    }

    let prompt = format!("{}\n{}", system, body);
    debug!("Generation prompt length: {} characters", prompt.len());
    Ok(prompt)
}

/// Ask the model to correct or expand a user-edited JSON array
pub fn build_refinement_prompt(config: &GeneratorConfig, edited_json: &str) -> CaseGenResult<String> {
    let system = render_template(config, SYSTEM_TEMPLATE, &HashMap::new())?;

    let mut params = HashMap::new();
    params.insert("edited_json".to_string(), edited_json.to_string());
    let body = render_template(config, REFINEMENT_TEMPLATE, &params)?;

    let prompt = format!("{}\n\n{}", system, body);
    debug!("Refinement prompt length: {} characters", prompt.len());
    Ok(prompt)
}
