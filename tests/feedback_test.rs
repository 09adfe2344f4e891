// tests/feedback_test.rs — Integration test: evaluator feedback prompt with real and missing scripts

use std::path::Path;

use evoprompt::core::types::ProgramRecord;
use evoprompt::infra::config::Config;
use evoprompt::prompt::PromptSampler;

fn no_archive(_: usize, _: usize) -> Vec<ProgramRecord> {
    Vec::new()
}

#[test]
fn test_nonexistent_script_never_fails() {
    let sampler = PromptSampler::new(&no_archive).unwrap();
    let out = sampler
        .build_feedback(
            "def run(): return 1",
            0.5,
            Some("ok"),
            Some(Path::new("/definitely/not/here/evaluate.py")),
        )
        .unwrap();

    assert!(out.contains("**Evaluation Script:**\n```python\nError reading evaluation script: "));
    assert!(!out.contains("panicked"));
    assert!(out.contains("**Program Score:** 0.500"));
}

#[test]
fn test_full_feedback_prompt() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("evaluate.py");
    std::fs::write(&script, "def evaluate(run):\n    return run()").unwrap();

    let sampler = PromptSampler::new(&no_archive).unwrap();
    let out = sampler
        .build_feedback("def run(): return 1", 0.9999, Some("score=1.0"), Some(&script))
        .unwrap();

    let expected = "\
You are an expert evaluator. Analyze the following program's performance and explain why it achieved the score it did.

**Program Code:**
```python
def run(): return 1
```

**Program Score:** 1.000

**Evaluation Script:**
```python
def evaluate(run):
    return run()
```

**Evaluation Logs:**
score=1.0

**Task:** Provide 2-3 concise insights explaining why this program achieved its specific score. Focus on:
- What the evaluation script is measuring and how the program performed on each metric
- Specific test cases or criteria that the program passed or failed
- Performance characteristics that contributed to the score (speed, accuracy, etc.)
- Any constraints or requirements that the program met or violated

Your analysis should explain the score, not suggest improvements. The goal is to understand what worked and what didn't based on the evaluation results.

Keep your analysis brief and specific. Each insight should be 1-2 sentences maximum.";
    pretty_assertions::assert_eq!(out, expected);
}

#[test]
fn test_missing_logs_and_script_placeholders() {
    let sampler = PromptSampler::new(&no_archive).unwrap();
    let out = sampler.build_feedback("x = 1", 0.0, None, None).unwrap();
    assert!(out.contains("**Evaluation Logs:**\nNo evaluation logs available."));
    assert!(out.contains("No evaluation script available."));
}

#[test]
fn test_config_file_drives_feedback() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[feedback]\nlanguage = \"rust\"\nevaluation_script = \"/missing/eval.rs\"\n",
    )
    .unwrap();
    let config = Config::load_from(&config_path).unwrap();

    let sampler = PromptSampler::with_config(&no_archive, &config).unwrap();
    let record = ProgramRecord::new("fn main() {}", 0.2).with_evaluation_logs("compiled");
    let out = sampler.build_feedback_for(&record, None).unwrap();

    assert!(out.contains("```rust\nfn main() {}\n```"));
    assert!(out.contains("```rust\nError reading evaluation script: "));
    assert!(out.contains("**Evaluation Logs:**\ncompiled"));
}
