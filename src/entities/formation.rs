/// Number of aliens in the widest row of the default formation.
pub const DEFAULT_BASE_WIDTH: u32 = 17;

/// Inputs of the triangular formation layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationLayout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub entity_width: i32,
    pub entity_height: i32,
    pub base_width: u32,
}

impl FormationLayout {
    pub fn row_count(&self) -> u32 {
        self.base_width.div_ceil(2)
    }

    pub fn columns_in_row(&self, row: u32) -> u32 {
        self.base_width.saturating_sub(2 * row)
    }

    /// Vertical offset that centres the formation in the top half of the screen.
    pub fn y_offset(&self) -> i32 {
        let formation_height = self.row_count() as i32 * self.entity_height;
        (self.screen_height / 2 - formation_height).div_euclid(2)
    }

    /// Left edge of `row` when its aliens are centred horizontally.
    pub fn row_start_x(&self, row: u32) -> i32 {
        let row_width = self.columns_in_row(row) as i32 * self.entity_width;
        (self.screen_width - row_width).div_euclid(2)
    }

    /// Starting coordinates of every alien, row-major, widest row first.
    ///
    /// Row 0 is the widest row and sits at the top; each following row is
    /// one alien height lower and two aliens narrower.
    pub fn positions(&self) -> Vec<(i32, i32)> {
        let y_offset = self.y_offset();
        let mut positions = Vec::new();

        for row in 0..self.row_count() {
            let start_x = self.row_start_x(row);
            let y = y_offset + row as i32 * self.entity_height;
            for column in 0..self.columns_in_row(row) {
                positions.push((start_x + column as i32 * self.entity_width, y));
            }
        }

        positions
    }
}

/// Convenience wrapper over [`FormationLayout::positions`].
pub fn build(
    screen_width: i32,
    screen_height: i32,
    entity_width: i32,
    entity_height: i32,
    base_width: u32,
) -> Vec<(i32, i32)> {
    FormationLayout {
        screen_width,
        screen_height,
        entity_width,
        entity_height,
        base_width,
    }
    .positions()
}
