//! Simulation state and core types

use glam::Vec2;

use super::rng::RandomSource;
use crate::consts::*;
use crate::renderer::palette::BALL_COLOR_COUNT;

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Creation index, increasing in spawn order
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Fixed at creation
    pub radius: u32,
    /// Index into the shared ball palette
    pub color: usize,
    /// Fraction of velocity kept after a wall bounce
    pub damping: f32,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: u32, color: usize) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
            damping: DAMPING,
        }
    }

    /// Spawn a ball at `center` with random radius, velocity and color
    pub fn spawn(id: u32, center: Vec2, rng: &mut impl RandomSource) -> Self {
        let radius = rng.int_inclusive(BALL_MIN_RADIUS, BALL_MAX_RADIUS);
        let vx = spawn_speed(rng);
        let vy = spawn_speed(rng);
        let color = rng.index(BALL_COLOR_COUNT);
        Self::new(id, center, Vec2::new(vx, vy), radius, color)
    }

    pub fn radius_f32(&self) -> f32 {
        self.radius as f32
    }
}

/// Random velocity component pushed away from zero
fn spawn_speed(rng: &mut impl RandomSource) -> f32 {
    let v = rng.float_inclusive(-BALL_MAX_SPEED, BALL_MAX_SPEED);
    if v.abs() >= BALL_MIN_SPEED {
        v
    } else if v >= 0.0 {
        BALL_MIN_SPEED
    } else {
        -BALL_MIN_SPEED
    }
}

/// All balls on screen, in spawn order
///
/// The sequence behaves as a stack: the most recently added ball is the
/// first one removed.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub width: u32,
    pub height: u32,
    balls: Vec<Ball>,
    /// Optional upper bound on the number of balls (None = unbounded)
    pub max_balls: Option<usize>,
    /// Next creation index
    next_id: u32,
}

impl Simulation {
    /// Empty simulation for a screen of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            balls: Vec::new(),
            max_balls: None,
            next_id: 0,
        }
    }

    /// Simulation pre-populated with `count` balls
    pub fn with_balls(width: u32, height: u32, count: usize, rng: &mut impl RandomSource) -> Self {
        let mut sim = Self::new(width, height);
        sim.add_n(count, rng);
        sim
    }

    /// Screen midpoint, where every ball spawns
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Append one random ball. Does nothing once `max_balls` is reached.
    pub fn add_ball(&mut self, rng: &mut impl RandomSource) {
        if self.max_balls.is_some_and(|cap| self.balls.len() >= cap) {
            return;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let ball = Ball::spawn(id, self.center(), rng);
        self.balls.push(ball);
    }

    /// Remove the most recently added ball, if any
    pub fn remove_last(&mut self) {
        self.balls.pop();
    }

    pub fn clear_all(&mut self) {
        self.balls.clear();
    }

    pub fn add_n(&mut self, count: usize, rng: &mut impl RandomSource) {
        for _ in 0..count {
            self.add_ball(rng);
        }
    }

    /// Advance every ball by one frame
    pub fn tick(&mut self) {
        let (width, height) = (self.width as f32, self.height as f32);
        for ball in &mut self.balls {
            super::tick::update_ball(ball, width, height);
        }
    }

    /// Advance each ball by one frame, handing it to `visit` right after
    /// its own update
    pub fn tick_each(&mut self, mut visit: impl FnMut(&Ball)) {
        let (width, height) = (self.width as f32, self.height as f32);
        for ball in &mut self.balls {
            super::tick::update_ball(ball, width, height);
            visit(ball);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedSource, seeded};

    #[test]
    fn test_spawn_exact_attributes() {
        let mut rng = ScriptedSource::new(vec![12], vec![2.5, -3.0], vec![4]);
        let ball = Ball::spawn(7, Vec2::new(160.0, 120.0), &mut rng);
        assert_eq!(ball.id, 7);
        assert_eq!(ball.radius, 12);
        assert_eq!(ball.vel, Vec2::new(2.5, -3.0));
        assert_eq!(ball.color, 4);
        assert_eq!(ball.pos, Vec2::new(160.0, 120.0));
        assert_eq!(ball.damping, 0.95);
    }

    #[test]
    fn test_spawn_speed_floor() {
        let mut rng = ScriptedSource::new(vec![5], vec![0.2, -0.5, 0.0, -0.0], vec![0]);
        let a = Ball::spawn(0, Vec2::ZERO, &mut rng);
        assert_eq!(a.vel, Vec2::new(1.0, -1.0));
        let b = Ball::spawn(1, Vec2::ZERO, &mut rng);
        assert_eq!(b.vel.x, 1.0);
        // -0.0 >= 0.0 so it also goes positive
        assert_eq!(b.vel.y, 1.0);
    }

    #[test]
    fn test_spawned_balls_always_move() {
        let mut rng = seeded(42);
        for id in 0..1000 {
            let ball = Ball::spawn(id, Vec2::ZERO, &mut rng);
            assert!(ball.vel.x.abs() >= 1.0 && ball.vel.x.abs() <= 4.0);
            assert!(ball.vel.y.abs() >= 1.0 && ball.vel.y.abs() <= 4.0);
            assert!((BALL_MIN_RADIUS..=BALL_MAX_RADIUS).contains(&ball.radius));
            assert!(ball.color < BALL_COLOR_COUNT);
        }
    }

    #[test]
    fn test_add_spawns_at_center() {
        let mut rng = seeded(1);
        let mut sim = Simulation::new(320, 240);
        sim.add_ball(&mut rng);
        assert_eq!(sim.balls()[0].pos, Vec2::new(160.0, 120.0));
    }

    #[test]
    fn test_remove_last_on_empty_is_noop() {
        let mut sim = Simulation::new(320, 240);
        sim.remove_last();
        assert!(sim.is_empty());
    }

    #[test]
    fn test_add_hundred_then_clear() {
        let mut rng = seeded(3);
        let mut sim = Simulation::new(320, 240);
        sim.add_n(100, &mut rng);
        assert_eq!(sim.len(), 100);
        sim.clear_all();
        assert!(sim.is_empty());
    }

    #[test]
    fn test_remove_last_is_stack_order() {
        let mut rng = seeded(5);
        let mut sim = Simulation::new(320, 240);
        sim.add_n(5, &mut rng);
        assert_eq!(sim.len(), 5);

        let mut removed = Vec::new();
        for _ in 0..5 {
            let last = sim.balls().last().map(|b| b.id);
            sim.remove_last();
            removed.extend(last);
        }
        assert!(sim.is_empty());
        assert_eq!(removed, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_ids_keep_increasing_after_removal() {
        let mut rng = seeded(9);
        let mut sim = Simulation::new(320, 240);
        sim.add_n(2, &mut rng);
        sim.remove_last();
        sim.add_ball(&mut rng);
        let ids: Vec<u32> = sim.balls().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_max_balls_cap() {
        let mut rng = seeded(11);
        let mut sim = Simulation::new(320, 240);
        sim.max_balls = Some(10);
        sim.add_n(100, &mut rng);
        assert_eq!(sim.len(), 10);
    }

    #[test]
    fn test_tick_each_visits_in_order() {
        let mut rng = seeded(13);
        let mut sim = Simulation::with_balls(320, 240, 4, &mut rng);
        let mut seen = Vec::new();
        sim.tick_each(|ball| seen.push(ball.id));
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
