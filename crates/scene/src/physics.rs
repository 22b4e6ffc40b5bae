use glam::Vec3;

/// Errors reported by a physics backend during setup.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    #[error("gravity must be finite, got {0}")]
    InvalidGravity(Vec3),
    #[error("physics backend unavailable: {0}")]
    Unavailable(String),
}

/// Contract for the external physics engine.
///
/// Initialization happens once, before the first frame. The seek core never
/// consults the physics world; the driver only checks that it is ready.
pub trait PhysicsWorld {
    /// Bring the physics world up. Calling it again after success is a no-op.
    fn initialize(&mut self) -> Result<(), PhysicsError>;

    fn is_ready(&self) -> bool;

    fn gravity(&self) -> Vec3;
}

/// Physics backend that only validates its settings.
///
/// Stands in for a real engine in headless runs and tests.
#[derive(Debug, Clone)]
pub struct NullPhysics {
    gravity: Vec3,
    ready: bool,
}

impl NullPhysics {
    pub fn new(gravity: Vec3) -> Self {
        Self {
            gravity,
            ready: false,
        }
    }
}

impl Default for NullPhysics {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, -9.81, 0.0))
    }
}

impl PhysicsWorld for NullPhysics {
    fn initialize(&mut self) -> Result<(), PhysicsError> {
        if self.ready {
            return Ok(());
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidGravity(self.gravity));
        }
        self.ready = true;
        tracing::debug!(gravity = ?self.gravity, "physics world initialized");
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn gravity(&self) -> Vec3 {
        self.gravity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_not_ready() {
        let p = NullPhysics::default();
        assert!(!p.is_ready());
        assert_eq!(p.gravity().y, -9.81);
    }

    #[test]
    fn initialize_is_idempotent() {
        let mut p = NullPhysics::default();
        p.initialize().unwrap();
        p.initialize().unwrap();
        assert!(p.is_ready());
    }

    #[test]
    fn rejects_non_finite_gravity() {
        let mut p = NullPhysics::new(Vec3::new(0.0, f32::NAN, 0.0));
        assert!(matches!(
            p.initialize(),
            Err(PhysicsError::InvalidGravity(_))
        ));
        assert!(!p.is_ready());
    }
}
