use glam::{Mat4, Quat, Vec2, Vec3};
use gridmaze_common::{BOARD_SIZE, Cell, START_POS};
use gridmaze_kernel::{RoundState, Session};

/// Pre-built shape handles the GPU backend knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Flat square on the board floor.
    Tile,
    /// Raised block on an occupied cell.
    Slab,
    /// Boundary wall segment.
    Wall,
    /// The circular player token.
    Token,
}

/// One draw call: which shape, where, what color.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand {
    pub shape: ShapeKind,
    pub transform: Mat4,
    pub color: [f32; 4],
}

const TILE_COLOR: [f32; 4] = [0.30, 0.26, 0.28, 1.0];
const SLAB_COLOR: [f32; 4] = [0.62, 0.30, 0.30, 1.0];
const WALL_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
const TOKEN_COLOR: [f32; 4] = [0.78, 0.2323, 0.321, 1.0];

const SLAB_HEIGHT: f32 = 0.5;
const TOKEN_HEIGHT: f32 = 1.4;
/// Walls sit half a cell outside the board edge.
const WALL_OFFSET: f32 = 5.5;

/// Cell center in world space; the board is centered on the origin.
fn cell_world(cell: Cell, z: f32) -> Vec3 {
    Vec3::new(
        cell.row as f32 - (BOARD_SIZE as f32 - 1.0) / 2.0,
        cell.col as f32 - (BOARD_SIZE as f32 - 1.0) / 2.0,
        z,
    )
}

/// Token position in world space.
fn token_world(pos: Vec2, z: f32) -> Vec3 {
    Vec3::new(pos.x - BOARD_SIZE as f32 / 2.0, pos.y, z)
}

fn scaled_at(scale: Vec3, translation: Vec3) -> Mat4 {
    Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, translation)
}

/// Build the frame's draw list in fixed order: occupied tiles, occupied
/// slabs, four boundary walls, token. Holes render nothing.
pub fn build_draw_list(session: &Session) -> Vec<DrawCommand> {
    let vibration = session.vibration_offset();
    let mut commands = Vec::with_capacity(2 * BOARD_SIZE * BOARD_SIZE + 5);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = Cell::new(row, col);
            if session.grid().is_occupied(cell) {
                commands.push(DrawCommand {
                    shape: ShapeKind::Tile,
                    transform: scaled_at(Vec3::new(1.0, 1.0, 0.05), cell_world(cell, 0.0)),
                    color: TILE_COLOR,
                });
            }
        }
    }

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = Cell::new(row, col);
            if session.grid().is_occupied(cell) {
                commands.push(DrawCommand {
                    shape: ShapeKind::Slab,
                    transform: scaled_at(
                        Vec3::new(0.9, 0.9, 0.9),
                        cell_world(cell, SLAB_HEIGHT + vibration),
                    ),
                    color: SLAB_COLOR,
                });
            }
        }
    }

    let along_x = Vec3::new(2.0 * WALL_OFFSET + 1.0, 1.0, 1.0);
    let along_y = Vec3::new(1.0, 2.0 * WALL_OFFSET + 1.0, 1.0);
    for (scale, translation) in [
        (along_x, Vec3::new(0.0, WALL_OFFSET, SLAB_HEIGHT)),
        (along_x, Vec3::new(0.0, -WALL_OFFSET, SLAB_HEIGHT)),
        (along_y, Vec3::new(WALL_OFFSET, 0.0, SLAB_HEIGHT)),
        (along_y, Vec3::new(-WALL_OFFSET, 0.0, SLAB_HEIGHT)),
    ] {
        commands.push(DrawCommand {
            shape: ShapeKind::Wall,
            transform: scaled_at(scale, translation),
            color: WALL_COLOR,
        });
    }

    let token_pos = match session.state() {
        RoundState::Placing => START_POS,
        RoundState::InPlay => session.token(),
    };
    commands.push(DrawCommand {
        shape: ShapeKind::Token,
        transform: Mat4::from_translation(token_world(token_pos, TOKEN_HEIGHT + vibration)),
        color: TOKEN_COLOR,
    });

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmaze_input::Action;

    #[test]
    fn draw_order_is_tiles_slabs_walls_token() {
        let session = Session::new(42);
        let commands = build_draw_list(&session);

        let kinds: Vec<ShapeKind> = commands.iter().map(|c| c.shape).collect();
        let first_slab = kinds.iter().position(|k| *k == ShapeKind::Slab).unwrap();
        let first_wall = kinds.iter().position(|k| *k == ShapeKind::Wall).unwrap();
        assert!(kinds[..first_slab].iter().all(|k| *k == ShapeKind::Tile));
        assert!(
            kinds[first_slab..first_wall]
                .iter()
                .all(|k| *k == ShapeKind::Slab)
        );
        assert_eq!(kinds[first_wall..first_wall + 4], [ShapeKind::Wall; 4]);
        assert_eq!(*kinds.last().unwrap(), ShapeKind::Token);
    }

    #[test]
    fn holes_are_skipped() {
        let session = Session::new(42);
        let holes = session.grid().hole_count();
        let commands = build_draw_list(&session);
        let tiles = commands
            .iter()
            .filter(|c| c.shape == ShapeKind::Tile)
            .count();
        let slabs = commands
            .iter()
            .filter(|c| c.shape == ShapeKind::Slab)
            .count();
        assert_eq!(tiles, BOARD_SIZE * BOARD_SIZE - holes);
        assert_eq!(slabs, tiles);
    }

    #[test]
    fn exactly_four_walls_and_one_token() {
        let session = Session::new(42);
        let commands = build_draw_list(&session);
        let walls = commands
            .iter()
            .filter(|c| c.shape == ShapeKind::Wall)
            .count();
        let tokens = commands
            .iter()
            .filter(|c| c.shape == ShapeKind::Token)
            .count();
        assert_eq!(walls, 4);
        assert_eq!(tokens, 1);
    }

    #[test]
    fn token_follows_position_once_in_play() {
        let mut session = Session::new(42);
        let placing = build_draw_list(&session);
        session.apply(Action::MoveRight);
        let in_play = build_draw_list(&session);

        let at = |cmds: &[DrawCommand]| cmds.last().unwrap().transform.w_axis.x;
        assert!((at(&in_play) - at(&placing) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn board_is_centered() {
        let corner_a = cell_world(Cell::new(0, 0), 0.0);
        let corner_b = cell_world(Cell::new(BOARD_SIZE - 1, BOARD_SIZE - 1), 0.0);
        assert_eq!(corner_a.truncate(), -corner_b.truncate());
    }
}
