use std::io;
use std::process::{Command, Output, Stdio};

use super::plan::{ExtractionPlan, ToolInvocation};
use crate::error::{Error, Result};

/// Execute a plan to completion, blocking until every process exits.
pub fn run(plan: &ExtractionPlan) -> Result<()> {
    match plan {
        ExtractionPlan::Single(invocation) => {
            let output = command(invocation)
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output()
                .map_err(|e| spawn_error(invocation, e))?;
            check(invocation, &output)
        }
        ExtractionPlan::Piped { producer, consumer } => {
            let mut producer_child = command(producer)
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn()
                .map_err(|e| spawn_error(producer, e))?;
            let stream = producer_child
                .stdout
                .take()
                .ok_or_else(|| io::Error::other("producer stdout was not captured"))?;

            // Ownership of the pipe moves to the consumer; our handle is
            // gone whether the spawn succeeds or not, so the producer can
            // never block on an unread pipe held by this process.
            let consumer_result = command(consumer)
                .stdin(Stdio::from(stream))
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .output();

            let producer_output = producer_child.wait_with_output()?;
            let consumer_output = consumer_result.map_err(|e| spawn_error(consumer, e))?;

            check(consumer, &consumer_output)?;
            check(producer, &producer_output)
        }
    }
}

fn command(invocation: &ToolInvocation) -> Command {
    let mut command = Command::new(&invocation.program);
    command.args(&invocation.args);
    command
}

fn spawn_error(invocation: &ToolInvocation, source: io::Error) -> Error {
    Error::ProcessNotFound {
        program: invocation.program.clone(),
        source,
    }
}

fn check(invocation: &ToolInvocation, output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    Err(Error::ExtractionFailed {
        tool: invocation.tool_name(),
        code: output.status.code().unwrap_or(-1),
        stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
    })
}
