//! Implementations for the SceneState structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::debug;

// Internal
use super::{Carriable, CarriableId, Params, Zone, ZoneId};
use crate::arm_ctrl::ArmState;
use crate::kinematics::Point2D;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The complete state of the simulated scene.
///
/// The scene owns every carriable: each one is either in the free set or
/// held by the arm, never both. The free set is iterated in insertion order,
/// creation order for the initial carriables, with released carriables
/// appended at the end.
#[derive(Debug, Clone)]
pub struct SceneState {
    arm: ArmState,

    free: Vec<Carriable>,

    zones: Vec<Zone>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SceneState {
    pub fn new(arm: ArmState, carriables: Vec<Carriable>, zones: Vec<Zone>) -> Self {
        Self {
            arm,
            free: carriables,
            zones,
        }
    }

    /// Build a scene from its parameters, numbering carriables and zones in
    /// the order they are given.
    pub fn from_params(arm: ArmState, params: &Params) -> Self {
        let carriables = params
            .carriables_m
            .iter()
            .enumerate()
            .map(|(i, p)| Carriable::new(CarriableId(i as u32), *p))
            .collect();

        let zones = params
            .zones
            .iter()
            .enumerate()
            .map(|(i, z)| Zone::new(ZoneId(i as u32), z.position_m, z.size_m))
            .collect();

        Self::new(arm, carriables, zones)
    }

    pub fn arm(&self) -> &ArmState {
        &self.arm
    }

    /// Carriables not held by the arm, in iteration order.
    pub fn free(&self) -> &[Carriable] {
        &self.free
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Total number of carriables in the scene, free or held.
    pub fn carriable_count(&self) -> usize {
        self.free.len() + self.arm.is_holding() as usize
    }

    /// Find a carriable by id, whether it is free or held.
    pub fn carriable(&self, id: CarriableId) -> Option<&Carriable> {
        self.free
            .iter()
            .chain(self.arm.held())
            .find(|c| c.id == id)
    }

    /// Move the end effector to the target, see `ArmState::move_to`.
    pub fn move_arm(&mut self, target: &Point2D) -> bool {
        self.arm.move_to(target)
    }

    /// Grab the first free carriable, in iteration order, which is within
    /// reach of the end effector.
    ///
    /// The carriable is moved from the free set to the arm in one step.
    /// Returns `None`, leaving the scene untouched, if the arm is already
    /// holding something or nothing is close enough.
    pub fn try_grab_nearest(&mut self) -> Option<&Carriable> {
        let arm = &self.arm;
        let idx = self.free.iter().position(|c| arm.can_grab(c))?;

        let candidate = self.free.remove(idx);
        if let Err(candidate) = self.arm.grab(candidate) {
            // can_grab was checked above, put the carriable back where it was
            self.free.insert(idx, candidate);
            return None;
        }

        debug!("Scene: {} carriables left free", self.free.len());

        self.arm.held()
    }

    /// Release the held carriable at the end effector's position, returning
    /// it to the free set.
    ///
    /// Returns `None` if the arm was not holding anything.
    pub fn release_held(&mut self) -> Option<&Carriable> {
        let mut released = self.arm.release()?;
        released.position_m = self.arm.end_effector();

        debug!(
            "Scene: carriable {} placed at ({:.3}, {:.3})",
            released.id, released.position_m.x, released.position_m.y
        );

        self.free.push(released);
        self.free.last()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::arm_ctrl::ArmConfig;

    fn scene() -> SceneState {
        let arm = ArmState::new(ArmConfig::new(Point2D::new(5.0, 0.0), [3.0, 2.0]).unwrap());

        SceneState::from_params(
            arm,
            &Params {
                carriables_m: vec![
                    Point2D::new(2.0, 2.0),
                    Point2D::new(8.0, 2.0),
                    Point2D::new(5.0, 8.0),
                ],
                zones: vec![],
            },
        )
    }

    fn free_ids(scene: &SceneState) -> Vec<u32> {
        scene.free().iter().map(|c| c.id.0).collect()
    }

    #[test]
    fn test_grab_and_release_are_inverse() {
        let mut scene = scene();
        assert!(scene.move_arm(&Point2D::new(2.0, 2.0)));

        assert_eq!(scene.try_grab_nearest().map(|c| c.id), Some(CarriableId(0)));
        assert!(scene.arm().is_holding());
        assert_eq!(free_ids(&scene), vec![1, 2]);
        assert_eq!(scene.carriable_count(), 3);

        assert_eq!(scene.release_held().map(|c| c.id), Some(CarriableId(0)));
        assert!(!scene.arm().is_holding());
        assert_eq!(free_ids(&scene), vec![1, 2, 0]);
        assert_eq!(scene.carriable_count(), 3);
    }

    #[test]
    fn test_release_places_at_end_effector() {
        let mut scene = scene();
        scene.move_arm(&Point2D::new(2.0, 2.0));
        scene.try_grab_nearest().unwrap();
        scene.move_arm(&Point2D::new(6.0, 3.0));

        let end = scene.arm().end_effector();
        let released = scene.release_held().unwrap();

        assert_eq!(released.position_m, end);
        assert!(nalgebra::distance(&released.position_m, &Point2D::new(6.0, 3.0)) < 1e-6);
    }

    #[test]
    fn test_second_grab_while_holding() {
        let mut scene = scene();
        scene.move_arm(&Point2D::new(2.0, 2.0));
        scene.try_grab_nearest().unwrap();

        // Put the arm over another carriable
        scene.move_arm(&Point2D::new(8.0, 2.0));
        let before = scene.free().to_vec();

        assert!(scene.try_grab_nearest().is_none());
        assert_eq!(scene.free(), &before[..]);
        assert_eq!(scene.arm().held().map(|c| c.id), Some(CarriableId(0)));
    }

    #[test]
    fn test_grab_with_nothing_near() {
        let mut scene = scene();
        scene.move_arm(&Point2D::new(4.0, 3.0));
        let before = scene.free().to_vec();

        assert!(scene.try_grab_nearest().is_none());
        assert_eq!(scene.free(), &before[..]);
        assert!(!scene.arm().is_holding());
    }

    #[test]
    fn test_release_with_nothing_held() {
        let mut scene = scene();

        assert!(scene.release_held().is_none());
        assert_eq!(free_ids(&scene), vec![0, 1, 2]);
    }

    #[test]
    fn test_grab_takes_first_in_order() {
        let arm = ArmState::new(ArmConfig::new(Point2D::origin(), [1.0, 1.0]).unwrap());
        let mut scene = SceneState::new(
            arm,
            vec![
                Carriable::new(CarriableId(7), Point2D::new(1.0, 1.05)),
                Carriable::new(CarriableId(3), Point2D::new(1.0, 1.0)),
            ],
            vec![],
        );
        scene.move_arm(&Point2D::new(1.0, 1.0));

        // Id 3 is closer, but id 7 comes first and is within the threshold
        assert_eq!(scene.try_grab_nearest().map(|c| c.id), Some(CarriableId(7)));
    }

    #[test]
    fn test_find_carriable() {
        let mut scene = scene();
        scene.move_arm(&Point2D::new(8.0, 2.0));
        scene.try_grab_nearest().unwrap();

        assert!(scene.carriable(CarriableId(1)).is_some());
        assert!(scene.carriable(CarriableId(0)).is_some());
        assert!(scene.carriable(CarriableId(9)).is_none());
    }
}
