//! Scripted decision making for headless battles.
use battle_core::HexCoord;

/// Picks the destination that closes the most distance to the nearest enemy.
///
/// Ties keep the earlier destination, so the pick follows discovery order.
/// Returns `None` when there is nowhere to go or nobody to approach.
pub fn approach(destinations: &[HexCoord], enemies: &[HexCoord]) -> Option<HexCoord> {
    let nearest = |cell: HexCoord| enemies.iter().map(|enemy| cell.hex_distance(*enemy)).min();

    let mut best: Option<(HexCoord, u32)> = None;
    for cell in destinations {
        let Some(distance) = nearest(*cell) else {
            return None;
        };
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((*cell, distance));
        }
    }
    best.map(|(cell, _)| cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_the_cell_nearest_an_enemy() {
        let destinations = [HexCoord::new(0, 1), HexCoord::new(1, 0), HexCoord::new(2, 0)];
        let enemies = [HexCoord::new(4, 0)];
        assert_eq!(approach(&destinations, &enemies), Some(HexCoord::new(2, 0)));
    }

    #[test]
    fn ties_keep_discovery_order() {
        let destinations = [HexCoord::new(1, 0), HexCoord::new(0, 1)];
        let enemies = [HexCoord::new(1, 1)];
        assert_eq!(approach(&destinations, &enemies), Some(HexCoord::new(1, 0)));
    }

    #[test]
    fn nothing_to_pick() {
        assert_eq!(approach(&[], &[HexCoord::ORIGIN]), None);
        assert_eq!(approach(&[HexCoord::ORIGIN], &[]), None);
    }
}
