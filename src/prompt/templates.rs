// src/prompt/templates.rs — Prompt bodies as versioned data with named slots
//
// The wording here is a contract with the model and with the edit applier
// that parses its replies. Change it only together with TEMPLATE_VERSION.

use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

use crate::infra::errors::PromptError;

pub const TEMPLATE_VERSION: &str = "1";

pub const SEARCH_MARKER: &str = "<<<<<<< SEARCH";
pub const DIVIDER_MARKER: &str = "=======";
pub const REPLACE_MARKER: &str = ">>>>>>> REPLACE";

pub const EVOLVE_BLOCK_START: &str = "# EVOLVE-BLOCK-START";
pub const EVOLVE_BLOCK_END: &str = "# EVOLVE-BLOCK-END";

pub const NO_ROWS: &str = "None yet.";
pub const NO_EXPLANATION: &str = "No explanation provided";
pub const NO_LOGS: &str = "No evaluation logs available.";
pub const NO_EVALUATION_SCRIPT: &str = "No evaluation script available.";
pub const SCRIPT_READ_ERROR: &str = "Error reading evaluation script";

/// A named template body and the slots it must be rendered with.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub name: &'static str,
    pub source: &'static str,
    pub slots: &'static [&'static str],
}

pub const GENERATION: TemplateSpec = TemplateSpec {
    name: "generation",
    source: GENERATION_BODY,
    slots: &["inspirations", "parent", "target_score", "evolve_instructions"],
};

pub const RETRY: TemplateSpec = TemplateSpec {
    name: "retry",
    source: RETRY_BODY,
    slots: &["error_message", "failure_type", "current_code"],
};

pub const FEEDBACK: TemplateSpec = TemplateSpec {
    name: "feedback",
    source: FEEDBACK_BODY,
    slots: &["language", "code", "score", "evaluation_script", "logs"],
};

pub const ALL_TEMPLATES: &[TemplateSpec] = &[GENERATION, RETRY, FEEDBACK];

/// Edit-region rules when the parent marks evolve blocks.
pub const RESTRICTED_INSTRUCTIONS: &str = "\
- Only change lines *between* the markers
`# EVOLVE-BLOCK-START` and `# EVOLVE-BLOCK-END`.
- Never alter code outside an EVOLVE block; any such hunk is rejected.";

/// Edit-region rules when the whole file is fair game.
pub const UNRESTRICTED_INSTRUCTIONS: &str = "\
- You can modify any part of the code as needed.";

const GENERATION_BODY: &str = "\
Act as an expert software developer. Your task is to iteratively improve the provided codebase.

# Prior programs

The following programs represent the current best performers on this task.
Each includes the developer's explanation of their improvements and feedback:

{{ inspirations }}

# Current program

Here is the current program we are trying to improve (you will
need to propose a modification to it below). It includes the developer's explanation of their improvements and feedback:

{{ parent }}

# Task
Your goal is to create a program that OUTPERFORMS the current program and all prior programs shown above.

Do not aim to match the performance of the best program - aim to exceed it.
Look for opportunities to combine the best ideas from multiple prior programs while adding novel improvements.
Consider edge cases, optimizations, and alternative approaches that the prior programs may have missed.

**TARGET TO BEAT: Score {{ target_score }}**

Suggest improvements that will lead to significantly better performance than any existing program.

# Response Format
Your response MUST follow this exact structure:

### Explanation
Briefly describe what you changed, why it helps, and how it will outperform the prior programs. Keep it under 3 sentences.
Focus on the specific improvements that will achieve better performance than any of the inspiration programs.
Do not restate or refer to the current program. Avoid implementation details already visible in the code diff.

### Code
[Provide your code changes using one of the following formats]
*Do not explain changes inside the code section.*

## Option 1: Major Structural Changes (Full File Replacement)
If the changes require major structural modifications, output a complete file wrapped in a Markdown code block:
```[language]
[Complete file content here]
```

## Option 2: Targeted Improvements (SEARCH/REPLACE format)
If making targeted improvements, output code changes using the SEARCH/REPLACE format:
```
<<<<<<< SEARCH
# original lines
=======
# replacement lines
>>>>>>> REPLACE

<<<<<<< SEARCH
# other set of original lines
=======
# other set of replacement lines
>>>>>>> REPLACE
```

If using the SEARCH/REPLACE format, please follow these rules:
### SEARCH/REPLACE block rules
{{ evolve_instructions }}
- You can suggest multiple changes, they will be applied in order.
- Emit *each* independent modification as its own complete SEARCH/REPLACE block, each change must start with `<<<<<<< SEARCH` and end with `>>>>>>> REPLACE`.
- Each SEARCH section must match the code EXACTLY, including all whitespace, indentation, and newlines.
- SEARCH/REPLACE blocks must NOT overlap - each must target different, non-overlapping code sections.
- Make sure that the changes you propose are consistent with each other. For example, if you refer to a new config variable
  somewhere, you should also propose a change to add that variable.
";

const RETRY_BODY: &str = "\
The previous attempt failed with the following error:

{{ error_message }}

This indicates a {{ failure_type }} issue that needs to be fixed.

Below is the current version of the code that needs to be corrected:

```
{{ current_code }}
```

Please generate a new response that fixes the issue.
The response should be relative to the current code shown above, and not to any earlier version.

Please provide corrected code changes using SEARCH/REPLACE or Full File Replacement format:";

const FEEDBACK_BODY: &str = "\
You are an expert evaluator. Analyze the following program's performance and explain why it achieved the score it did.

**Program Code:**
```{{ language }}
{{ code }}
```

**Program Score:** {{ score }}

**Evaluation Script:**
```{{ language }}
{{ evaluation_script }}
```

**Evaluation Logs:**
{{ logs }}

**Task:** Provide 2-3 concise insights explaining why this program achieved its specific score. Focus on:
- What the evaluation script is measuring and how the program performed on each metric
- Specific test cases or criteria that the program passed or failed
- Performance characteristics that contributed to the score (speed, accuracy, etc.)
- Any constraints or requirements that the program met or violated

Your analysis should explain the score, not suggest improvements. The goal is to understand what worked and what didn't based on the evaluation results.

Keep your analysis brief and specific. Each insight should be 1-2 sentences maximum.";

/// Every score shown to the model goes through here.
pub fn format_score(score: f64) -> String {
    format!("{score:.3}")
}

/// Compiled template environment. Rendering with a slot missing is an error.
pub struct PromptTemplates {
    env: Environment<'static>,
}

impl PromptTemplates {
    pub fn new() -> Result<Self, PromptError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        for spec in ALL_TEMPLATES {
            env.add_template(spec.name, spec.source)?;
        }
        tracing::debug!(
            "Compiled {} prompt templates (version {})",
            ALL_TEMPLATES.len(),
            TEMPLATE_VERSION
        );
        Ok(Self { env })
    }

    pub fn render<S: Serialize>(&self, spec: &TemplateSpec, ctx: S) -> Result<String, PromptError> {
        let template = self.env.get_template(spec.name)?;
        Ok(template.render(ctx)?)
    }
}
