//! Research memory-block layout and the semantics of the two research tools.
//!
//! The platform executes the uploaded tool source (see `registrar`); the
//! functions here are the same semantics against a block-store abstraction,
//! and the tests pin the contract the uploaded source must honor.

use std::collections::BTreeMap;

/// Label of the block holding the agent's behavioral instructions.
pub const PERSONA_LABEL: &str = "persona";
/// Label of the block tracking the human counterpart.
pub const HUMAN_LABEL: &str = "human";
/// Label of the checklist block the agent maintains while researching.
pub const RESEARCH_PLAN_LABEL: &str = "research_plan";
/// Label of the block accumulating the final report.
pub const RESEARCH_REPORT_LABEL: &str = "research_report";

/// Acknowledgment returned when a plan has been written.
pub const PLAN_CREATED_ACK: &str = "Research plan successfully created, time to execute the plan!";
/// Acknowledgment returned when the research state has been cleared.
pub const RESET_ACK: &str = "Research state successfully reset";

/// Whole-value replacement of labeled memory blocks.
///
/// Mirrors the memory interface the platform exposes to executing tools.
/// Blocks are never deleted through this interface, only replaced.
pub trait BlockStore {
    fn update_block_value(&mut self, label: &str, value: String);
}

impl BlockStore for BTreeMap<String, String> {
    fn update_block_value(&mut self, label: &str, value: String) {
        self.insert(label.to_string(), value);
    }
}

/// Render an ordered step list into the checklist blob stored in
/// `research_plan`. Steps are 1-indexed and kept in input order; the whole
/// value is regenerated on every planning call.
pub fn render_plan(topic: &str, steps: &[String]) -> String {
    let mut plan = format!("The plan of action is to research `{topic}` with the following steps: \n");
    for (i, step) in steps.iter().enumerate() {
        plan.push_str(&format!("- [ ] Step {} - {step}\n", i + 1));
    }
    plan
}

/// `create_research_plan`: replace the plan block with a fresh checklist.
pub fn create_research_plan(
    memory: &mut dyn BlockStore,
    steps: &[String],
    topic: &str,
) -> &'static str {
    memory.update_block_value(RESEARCH_PLAN_LABEL, render_plan(topic, steps));
    PLAN_CREATED_ACK
}

/// `reset_research`: blank both tracked blocks, returning them to the
/// pristine state.
pub fn reset_research(memory: &mut dyn BlockStore) -> &'static str {
    memory.update_block_value(RESEARCH_PLAN_LABEL, String::new());
    memory.update_block_value(RESEARCH_REPORT_LABEL, String::new());
    RESET_ACK
}
