//! Console rendering of streamed events and the final report.

use console::style;

use crate::types::{StreamedEvent, ToolCallRecord};

/// Print one streamed event as it arrives. Unknown event types are skipped.
pub fn print_event(event: &StreamedEvent) {
    match event {
        StreamedEvent::Reasoning(text) => println!("{}", style(text).dim()),
        StreamedEvent::ToolCall(call) => print_tool_call(call),
        StreamedEvent::Assistant(text) => println!("{text}"),
        StreamedEvent::Unknown { .. } => {}
    }
}

fn print_tool_call(call: &ToolCallRecord) {
    println!("{} {}", style("Calling tool:").cyan(), call.name);
    if let Ok(pretty) = serde_json::to_string_pretty(&call.arguments) {
        println!("{pretty}");
    }
}

/// Render the final report to the terminal, styling markdown headings and
/// rules; everything else passes through unchanged.
pub fn print_report(markdown: &str) {
    println!();
    println!("{}", style("== research report ==").bold());
    println!();
    for line in markdown.lines() {
        println!("{}", render_line(line));
    }
}

fn render_line(line: &str) -> String {
    if let Some(heading) = line.strip_prefix("### ") {
        return style(heading).bold().to_string();
    }
    if let Some(heading) = line.strip_prefix("## ") {
        return style(heading).bold().underlined().to_string();
    }
    if let Some(heading) = line.strip_prefix("# ") {
        return style(heading).bold().cyan().to_string();
    }
    if line.trim() == "---" {
        return style("----------------------------------------")
            .dim()
            .to_string();
    }
    line.to_string()
}
