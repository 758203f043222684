//! Observability hooks for the resolution engine.
//!
//! Everything here compiles to a no-op unless the `tracing` feature is enabled, so the engine
//! stays dependency-free for embedders that bring their own diagnostics.

// self
use crate::_prelude::*;

/// A span builder wrapping one resolution pass.
#[derive(Clone, Debug)]
pub struct ResolveSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl ResolveSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("widget_config.resolve", stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span; resolution is synchronous, so a guard is all that is needed.
	pub fn entered(self) -> ResolveSpanGuard {
		#[cfg(feature = "tracing")]
		{
			ResolveSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			ResolveSpanGuard {}
		}
	}
}

/// RAII guard returned by [`ResolveSpan::entered`].
pub struct ResolveSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for ResolveSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("ResolveSpanGuard(..)")
	}
}

/// Emits a debug event summarizing one resolution pass.
pub(crate) fn record_resolution(total: usize, filtered: usize, mode: &'static str) {
	#[cfg(feature = "tracing")]
	tracing::debug!(total, filtered, mode, "Resolved widget configuration.");
	#[cfg(not(feature = "tracing"))]
	let _ = (total, filtered, mode);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn resolve_span_noop_without_tracing() {
		let _guard = ResolveSpan::new("test").entered();

		record_resolution(0, 0, "disabled");
		// Compile-time smoke test ensures the guard exists even when tracing is disabled.
	}
}
