//! Small value groups shared by the record: per-wheel quadruples and X/Y/Z triples.

use serde::Serialize;

/// One value per wheel, in wire order (front-left, front-right, rear-left, rear-right).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Corners<T> {
    pub fl: T,
    pub fr: T,
    pub rl: T,
    pub rr: T,
}

impl<T> Corners<T> {
    pub fn new(fl: T, fr: T, rl: T, rr: T) -> Self {
        Self { fl, fr, rl, rr }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Corners<U> {
        Corners {
            fl: f(self.fl),
            fr: f(self.fr),
            rl: f(self.rl),
            rr: f(self.rr),
        }
    }

    pub fn to_array(self) -> [T; 4] {
        [self.fl, self.fr, self.rl, self.rr]
    }

    /// Pick the pair (or all four) belonging to `group`.
    pub fn select(self, group: TireGroup) -> Vec<T> {
        match group {
            TireGroup::Front => vec![self.fl, self.fr],
            TireGroup::Rear => vec![self.rl, self.rr],
            TireGroup::Left => vec![self.fl, self.rl],
            TireGroup::Right => vec![self.fr, self.rr],
            TireGroup::Total => vec![self.fl, self.fr, self.rl, self.rr],
        }
    }
}

impl Corners<f32> {
    /// Arithmetic mean of the corners in `group`.
    pub fn average(self, group: TireGroup) -> f32 {
        let values = self.select(group);
        let count = values.len() as f32;
        values.into_iter().sum::<f32>() / count
    }
}

/// Wheel combinations used for averaged views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TireGroup {
    Front,
    Rear,
    Left,
    Right,
    Total,
}

/// An X/Y/Z triple in the simulator's car-local frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec3<U> {
        Vec3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl Vec3<f32> {
    /// Euclidean norm.
    pub fn magnitude(self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_averages() {
        let temps = Corners::new(180.0f32, 190.0, 200.0, 210.0);
        assert!((temps.average(TireGroup::Front) - 185.0).abs() < 1e-4);
        assert!((temps.average(TireGroup::Rear) - 205.0).abs() < 1e-4);
        assert!((temps.average(TireGroup::Left) - 190.0).abs() < 1e-4);
        assert!((temps.average(TireGroup::Right) - 200.0).abs() < 1e-4);
        assert!((temps.average(TireGroup::Total) - 195.0).abs() < 1e-4);
    }

    #[test]
    fn test_map_preserves_wheel_order() {
        let c = Corners::new(1, 2, 3, 4).map(|v| v * 10);
        assert_eq!(c.to_array(), [10, 20, 30, 40]);
    }

    #[test]
    fn test_magnitude() {
        let v = Vec3::new(3.0f32, 4.0, 12.0);
        assert!((v.magnitude() - 13.0).abs() < 1e-4);
    }
}
