//! Status reporting
//!
//! The player core never draws anything. It pushes state changes to an
//! optional [`StatusSink`] and offers a [`PlayerStatus`] snapshot whose
//! `Display` renders the classic debug status panel.

use std::fmt;

use glam::Vec3;

use super::crouch::CrouchState;

/// Fraction thresholds for the stamina bar tiers
const LOW_STAMINA: f32 = 0.2;
const MEDIUM_STAMINA: f32 = 0.5;

/// Coarse stamina tier for bar tinting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaLevel {
    Low,
    Medium,
    High,
}

impl StaminaLevel {
    /// Tier for a fraction of max stamina.
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction < LOW_STAMINA {
            StaminaLevel::Low
        } else if fraction < MEDIUM_STAMINA {
            StaminaLevel::Medium
        } else {
            StaminaLevel::High
        }
    }
}

/// One-shot events worth surfacing to a UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackSignal {
    /// Tried to stand up under a ceiling
    StandBlocked,
    /// Tried to jump from a crouch under a ceiling
    JumpBlocked,
    /// A ceiling pushed the player into a crouch
    ForcedCrouch,
    ToolPickedUp,
    ToolDropped,
    Landed,
    LeftGround,
}

/// Receiver for player state changes. Every method defaults to a no-op.
pub trait StatusSink: Send {
    /// Stamina moved. `fraction` is in `[0, 1]`.
    fn stamina_changed(&mut self, _fraction: f32, _level: StaminaLevel) {}

    fn feedback(&mut self, _signal: FeedbackSignal) {}
}

/// Sink that keeps everything it receives. Handy for tests and tools.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub stamina: Vec<(f32, StaminaLevel)>,
    pub signals: Vec<FeedbackSignal>,
}

impl StatusSink for RecordingSink {
    fn stamina_changed(&mut self, fraction: f32, level: StaminaLevel) {
        self.stamina.push((fraction, level));
    }

    fn feedback(&mut self, signal: FeedbackSignal) {
        self.signals.push(signal);
    }
}

/// What the player is doing, as a status panel would phrase it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Posture {
    Sprinting,
    Standing,
    Crouched,
    Crouching,
    StandingUp,
}

impl Posture {
    pub fn new(state: CrouchState, sprinting: bool) -> Self {
        match state {
            CrouchState::Standing if sprinting => Posture::Sprinting,
            CrouchState::Standing => Posture::Standing,
            CrouchState::Crouching => Posture::Crouched,
            CrouchState::TransitioningToCrouch => Posture::Crouching,
            CrouchState::TransitioningToStand => Posture::StandingUp,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Posture::Sprinting => "Sprinting",
            Posture::Standing => "Standing",
            Posture::Crouched => "Crouched",
            Posture::Crouching => "Crouching...",
            Posture::StandingUp => "Standing up...",
        }
    }
}

/// Point-in-time view of the player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStatus {
    pub position: Vec3,
    pub grounded: bool,
    pub crouch_state: CrouchState,
    pub posture: Posture,
    pub height: f32,
    pub horizontal_speed: f32,
    pub vertical_velocity: f32,
    pub stamina: f32,
    pub max_stamina: f32,
    pub held_tool: Option<String>,
}

impl fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Position: ({:.2}, {:.2}, {:.2})",
            self.position.x, self.position.y, self.position.z
        )?;
        writeln!(f, "Grounded: {}", self.grounded)?;
        writeln!(f, "State: {} ({:?})", self.posture.describe(), self.crouch_state)?;
        writeln!(f, "Height: {:.2}", self.height)?;
        writeln!(f, "Speed: {:.2}", self.horizontal_speed)?;
        writeln!(f, "Vertical: {:.2}", self.vertical_velocity)?;
        writeln!(f, "Stamina: {:.0}/{:.0}", self.stamina, self.max_stamina)?;
        write!(f, "Tool: {}", self.held_tool.as_deref().unwrap_or("None"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamina_levels() {
        assert_eq!(StaminaLevel::from_fraction(0.0), StaminaLevel::Low);
        assert_eq!(StaminaLevel::from_fraction(0.19), StaminaLevel::Low);
        assert_eq!(StaminaLevel::from_fraction(0.2), StaminaLevel::Medium);
        assert_eq!(StaminaLevel::from_fraction(0.49), StaminaLevel::Medium);
        assert_eq!(StaminaLevel::from_fraction(0.5), StaminaLevel::High);
        assert_eq!(StaminaLevel::from_fraction(1.0), StaminaLevel::High);
    }

    #[test]
    fn test_posture() {
        assert_eq!(Posture::new(CrouchState::Standing, true), Posture::Sprinting);
        assert_eq!(Posture::new(CrouchState::Standing, false), Posture::Standing);
        assert_eq!(Posture::new(CrouchState::Crouching, false), Posture::Crouched);
        assert_eq!(
            Posture::new(CrouchState::TransitioningToStand, false).describe(),
            "Standing up..."
        );
    }

    #[test]
    fn test_status_display() {
        let status = PlayerStatus {
            position: Vec3::new(1.0, 0.0, -2.5),
            grounded: true,
            crouch_state: CrouchState::Crouching,
            posture: Posture::Crouched,
            height: 1.0,
            horizontal_speed: 1.5,
            vertical_velocity: -2.0,
            stamina: 42.4,
            max_stamina: 100.0,
            held_tool: None,
        };
        let text = status.to_string();
        assert!(text.contains("Position: (1.00, 0.00, -2.50)"));
        assert!(text.contains("State: Crouched (Crouching)"));
        assert!(text.contains("Stamina: 42/100"));
        assert!(text.ends_with("Tool: None"));
    }

    #[test]
    fn test_recording_sink() {
        let mut sink = RecordingSink::default();
        sink.feedback(FeedbackSignal::Landed);
        sink.stamina_changed(0.1, StaminaLevel::Low);
        assert_eq!(sink.signals, vec![FeedbackSignal::Landed]);
        assert_eq!(sink.stamina.len(), 1);
    }
}
