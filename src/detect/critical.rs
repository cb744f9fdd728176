//! Critical point selection among detected junctions.
//!
//! A critical point is a junction whose clearance is a local minimum within
//! an epsilon neighbourhood of other junctions: the narrowest spot of a
//! passage. Downstream consumers typically place graph vertices there; this
//! module only selects the points and builds no graph.

use super::detector::{JunctionMap, JunctionPoint};

/// A junction selected as a local clearance minimum.
#[derive(Clone, Debug)]
pub struct CriticalPoint {
    /// The underlying junction.
    pub point: JunctionPoint,
    /// How far the neighbourhood's average clearance exceeds this point's
    /// clearance. Larger means a more pronounced bottleneck.
    pub clearance_drop: f32,
}

/// Select clearance-minimum junctions within `epsilon`-neighbourhoods.
///
/// A junction qualifies when no neighbour within `epsilon` has lower average
/// clearance and its own clearance is strictly below the neighbourhood
/// average. Isolated junctions (no neighbour within `epsilon`) never
/// qualify. When two qualifying points fall inside each other's
/// neighbourhood, the one with the larger clearance drop wins.
pub fn find_critical_points(junctions: &JunctionMap, epsilon: f32) -> Vec<CriticalPoint> {
    let mut points: Vec<&JunctionPoint> = junctions.values().collect();
    // Deterministic scan order regardless of map iteration order.
    points.sort_by_key(|p| (p.coord.y, p.coord.x));

    let clearances: Vec<f32> = points.iter().map(|p| p.average_clearance()).collect();
    let mut selected: Vec<CriticalPoint> = Vec::new();

    for (i, candidate) in points.iter().enumerate() {
        let clearance = clearances[i];
        let mut neighbour_sum = 0.0;
        let mut neighbour_count = 0usize;
        let mut is_minimum = true;

        for (j, other) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            if candidate.coord.distance(other.coord) > epsilon {
                continue;
            }
            neighbour_sum += clearances[j];
            neighbour_count += 1;
            if clearances[j] < clearance {
                is_minimum = false;
                break;
            }
        }

        if !is_minimum || neighbour_count == 0 {
            continue;
        }
        let neighbourhood_average = neighbour_sum / neighbour_count as f32;
        if clearance >= neighbourhood_average {
            continue;
        }
        let clearance_drop = neighbourhood_average - clearance;

        // Retain only the strongest bottleneck per neighbourhood.
        let mut displaced = Vec::new();
        let mut keep = true;
        for (idx, existing) in selected.iter().enumerate() {
            if existing.point.coord.distance(candidate.coord) > epsilon {
                continue;
            }
            if existing.clearance_drop >= clearance_drop {
                keep = false;
                break;
            }
            displaced.push(idx);
        }
        if !keep {
            continue;
        }
        for idx in displaced.into_iter().rev() {
            selected.remove(idx);
        }
        selected.push(CriticalPoint {
            point: (*candidate).clone(),
            clearance_drop,
        });
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use std::collections::HashMap;

    fn junction(x: i32, y: i32, clearance: f32) -> JunctionPoint {
        // Two basis points straight left/right at the requested distance.
        let offset = clearance as i32;
        JunctionPoint {
            coord: GridCoord::new(x, y),
            radius: clearance.ceil() as u32,
            basis_points: vec![
                GridCoord::new(x - offset, y),
                GridCoord::new(x + offset, y),
            ],
        }
    }

    fn map_of(points: Vec<JunctionPoint>) -> JunctionMap {
        points
            .into_iter()
            .map(|p| (p.coord, p))
            .collect::<HashMap<_, _>>()
    }

    #[test]
    fn test_local_minimum_selected() {
        // A narrowing passage: clearance dips at x=10.
        let junctions = map_of(vec![
            junction(8, 5, 6.0),
            junction(9, 5, 5.0),
            junction(10, 5, 3.0),
            junction(11, 5, 5.0),
            junction(12, 5, 6.0),
        ]);
        let critical = find_critical_points(&junctions, 3.0);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].point.coord, GridCoord::new(10, 5));
        assert!(critical[0].clearance_drop > 0.0);
    }

    #[test]
    fn test_isolated_junction_not_critical() {
        let junctions = map_of(vec![junction(5, 5, 4.0), junction(50, 50, 4.0)]);
        assert!(find_critical_points(&junctions, 3.0).is_empty());
    }

    #[test]
    fn test_uniform_clearance_yields_nothing() {
        let junctions = map_of(vec![
            junction(5, 5, 4.0),
            junction(6, 5, 4.0),
            junction(7, 5, 4.0),
        ]);
        assert!(find_critical_points(&junctions, 3.0).is_empty());
    }

    #[test]
    fn test_stronger_bottleneck_wins_neighbourhood() {
        // Two dips close together: only the deeper one survives.
        let junctions = map_of(vec![
            junction(8, 5, 7.0),
            junction(9, 5, 5.0),
            junction(10, 5, 7.0),
            junction(11, 5, 2.0),
            junction(12, 5, 7.0),
        ]);
        let critical = find_critical_points(&junctions, 4.0);
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].point.coord, GridCoord::new(11, 5));
    }
}
