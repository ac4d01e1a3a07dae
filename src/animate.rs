/// The tick-paced animation state machine.
pub mod engine;
/// Inter-tick pacing presets and the settle delay.
pub mod pace;
