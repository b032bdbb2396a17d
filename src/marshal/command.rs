//! Boundary Marshaller
//!
//! Exports a command as `(name, parameters_or_none, raw_text)`. Each
//! intermediate host object is owned by a local binding, so every `?`
//! releases whatever has been built so far and a successful composite
//! takes ownership of its parts.

use super::{ErrorKind, MarshalError, ToHostValue, string_failure_kind};
use crate::diagnostics::DiagnosticSink;
use crate::host::Host;
use crate::model::ParsedCommand;

impl ToHostValue for ParsedCommand {
    fn to_host_value<H: Host>(
        &self,
        host: &H,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<H::Object, MarshalError> {
        let name = host.string(self.keyword()).map_err(|e| {
            MarshalError::diagnose(
                sink,
                string_failure_kind(&e),
                format!(
                    "Unable to convert the command name to a host string: {} ({})",
                    self.keyword(),
                    e
                ),
            )
        })?;
        let gcode = host.string(self.raw_text()).map_err(|e| {
            MarshalError::diagnose(
                sink,
                string_failure_kind(&e),
                format!(
                    "Unable to convert the gcode to a host string: {} ({})",
                    self.raw_text(),
                    e
                ),
            )
        })?;

        if self.is_empty() {
            return host.triple(name, host.none(), gcode).map_err(|e| {
                MarshalError::diagnose(
                    sink,
                    ErrorKind::CompositionFailure,
                    format!(
                        "Unable to convert the command (no parameters) to a tuple. Command: {} Gcode: {} ({})",
                        self.keyword(),
                        self.raw_text(),
                        e
                    ),
                )
            });
        }

        let mut parameters = host.mapping().map_err(|e| {
            MarshalError::diagnose(
                sink,
                ErrorKind::CompositionFailure,
                format!(
                    "Unable to create the parameters mapping. Command: {} ({})",
                    self.keyword(),
                    e
                ),
            )
        })?;

        for parameter in self.parameters() {
            // Already diagnosed by the value marshaller
            let value = parameter.value.to_host_value(host, sink)?;

            host.insert(&mut parameters, &parameter.name, value)
                .map_err(|e| {
                    MarshalError::diagnose(
                        sink,
                        ErrorKind::CompositionFailure,
                        format!(
                            "Unable to add the command parameter to the parameters mapping. Parameter Name: {} Value Type: {} Value: {} ({})",
                            parameter.name,
                            parameter.value.kind(),
                            parameter.value,
                            e
                        ),
                    )
                })?;
        }

        host.triple(name, parameters, gcode).map_err(|e| {
            MarshalError::diagnose(
                sink,
                ErrorKind::CompositionFailure,
                format!(
                    "Unable to convert the command (with parameters) to a tuple. Command: {} Gcode: {} ({})",
                    self.keyword(),
                    self.raw_text(),
                    e
                ),
            )
        })
    }
}
