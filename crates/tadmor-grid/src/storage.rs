//! Owned field storage over a [`GridLayout`].

use std::ops::{Index, IndexMut};

use tadmor_core::{Fields, FieldsMut};

use crate::layout::GridLayout;

/// One flat, zero-initialized `f32` buffer holding every field of a
/// padded grid, laid out as described by its [`GridLayout`].
///
/// The buffer is allocated once and never resized. Indexing by
/// `(k, x, y)` uses **padded** coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldGrid {
    layout: GridLayout,
    data: Vec<f32>,
}

impl FieldGrid {
    /// Allocate a zeroed grid for `layout`.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            data: vec![0.0; layout.len()],
        }
    }

    /// The layout this grid was allocated for.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// The whole buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The whole buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Value at padded coordinate `(x, y)` of field `k`.
    #[inline]
    pub fn get(&self, k: usize, x: usize, y: usize) -> f32 {
        self.data[self.layout.offset(k, x, y)]
    }

    /// Overwrite the value at padded coordinate `(x, y)` of field `k`.
    #[inline]
    pub fn set(&mut self, k: usize, x: usize, y: usize, value: f32) {
        let o = self.layout.offset(k, x, y);
        self.data[o] = value;
    }

    /// The contiguous block of field `k`.
    pub fn field(&self, k: usize) -> &[f32] {
        let stride = self.layout.field_stride();
        &self.data[k * stride..(k + 1) * stride]
    }

    /// The contiguous block of field `k`, mutably.
    pub fn field_mut(&mut self, k: usize) -> &mut [f32] {
        let stride = self.layout.field_stride();
        &mut self.data[k * stride..(k + 1) * stride]
    }

    /// Strided view of `ncell` cells per field starting at flat offset
    /// `start` (an offset into field 0).
    pub fn view(&self, start: usize, ncell: usize) -> Fields<'_> {
        Fields::new(&self.data[start..], ncell, self.layout.field_stride())
    }

    /// Mutable strided view of `ncell` cells per field starting at flat
    /// offset `start`.
    pub fn view_mut(&mut self, start: usize, ncell: usize) -> FieldsMut<'_> {
        let stride = self.layout.field_stride();
        FieldsMut::new(&mut self.data[start..], ncell, stride)
    }

    /// View covering every padded cell of every field.
    pub fn whole(&self) -> Fields<'_> {
        self.view(0, self.layout.field_stride())
    }

    /// Mutable view covering every padded cell of every field.
    pub fn whole_mut(&mut self) -> FieldsMut<'_> {
        let stride = self.layout.field_stride();
        self.view_mut(0, stride)
    }

    /// Copy `src` over `self` so that padded cell `(x - shift, y - shift)`
    /// of `src` lands on `(x, y)` of `self`, for every interior row.
    ///
    /// Per field this moves `ny * nx_all` contiguous elements starting at
    /// `(NGHOST - shift, NGHOST - shift)` in `src` to `(NGHOST, NGHOST)` in
    /// `self`. Cells outside the interior window receive ghost-region data
    /// and are expected to be rewritten by the next boundary pass.
    ///
    /// # Panics
    ///
    /// Panics if `shift > NGHOST` or the layouts differ.
    pub fn copy_shifted_from(&mut self, src: &FieldGrid, shift: usize) {
        assert_eq!(self.layout, src.layout, "layout mismatch in shifted copy");
        assert!(shift <= GridLayout::NGHOST, "shift {shift} exceeds ghost width");
        let g = GridLayout::NGHOST;
        let run = self.layout.ny() * self.layout.nx_all();
        for k in 0..self.layout.nfield() {
            let dst = self.layout.offset(k, g, g);
            let from = self.layout.offset(k, g - shift, g - shift);
            self.data[dst..dst + run].copy_from_slice(&src.data[from..from + run]);
        }
    }
}

impl Index<(usize, usize, usize)> for FieldGrid {
    type Output = f32;

    #[inline]
    fn index(&self, (k, x, y): (usize, usize, usize)) -> &f32 {
        &self.data[self.layout.offset(k, x, y)]
    }
}

impl IndexMut<(usize, usize, usize)> for FieldGrid {
    #[inline]
    fn index_mut(&mut self, (k, x, y): (usize, usize, usize)) -> &mut f32 {
        let o = self.layout.offset(k, x, y);
        &mut self.data[o]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout(nx: usize, ny: usize, nfield: usize) -> GridLayout {
        GridLayout::new(nx, ny, nfield).unwrap()
    }

    #[test]
    fn new_grid_is_zeroed() {
        let grid = FieldGrid::new(layout(4, 3, 2));
        assert_eq!(grid.as_slice().len(), 2 * 10 * 9);
        assert!(grid.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn field_blocks_are_disjoint() {
        let mut grid = FieldGrid::new(layout(2, 2, 3));
        grid.field_mut(1).fill(7.0);
        assert!(grid.field(0).iter().all(|&v| v == 0.0));
        assert!(grid.field(1).iter().all(|&v| v == 7.0));
        assert!(grid.field(2).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn index_and_get_agree() {
        let mut grid = FieldGrid::new(layout(3, 3, 2));
        grid[(1, 4, 5)] = 2.5;
        assert_eq!(grid.get(1, 4, 5), 2.5);
        grid.set(0, 0, 0, -1.0);
        assert_eq!(grid[(0, 0, 0)], -1.0);
    }

    #[test]
    fn view_spans_fields() {
        let mut grid = FieldGrid::new(layout(2, 2, 2));
        let o = grid.layout().offset(0, 1, 2);
        grid.set(0, 1, 2, 1.0);
        grid.set(0, 2, 2, 2.0);
        grid.set(1, 1, 2, 3.0);
        let view = grid.view(o, 2);
        assert_eq!(view.field(0), &[1.0, 2.0]);
        assert_eq!(view.field(1), &[3.0, 0.0]);
    }

    #[test]
    fn shifted_copy_moves_interior_by_one_cell() {
        let l = layout(4, 4, 1);
        let mut src = FieldGrid::new(l);
        for y in 0..l.ny_all() {
            for x in 0..l.nx_all() {
                src.set(0, x, y, (100 * y + x) as f32);
            }
        }
        let mut dst = FieldGrid::new(l);
        dst.copy_shifted_from(&src, 1);
        let g = GridLayout::NGHOST;
        for y in g..g + l.ny() {
            for x in g..g + l.nx() {
                assert_eq!(dst.get(0, x, y), src.get(0, x - 1, y - 1));
            }
        }
    }

    #[test]
    fn unshifted_copy_preserves_interior() {
        let l = layout(3, 5, 2);
        let mut src = FieldGrid::new(l);
        for (i, v) in src.as_mut_slice().iter_mut().enumerate() {
            *v = i as f32;
        }
        let mut dst = FieldGrid::new(l);
        dst.copy_shifted_from(&src, 0);
        let g = GridLayout::NGHOST;
        for k in 0..2 {
            for y in g..g + l.ny() {
                for x in g..g + l.nx() {
                    assert_eq!(dst.get(k, x, y), src.get(k, x, y));
                }
            }
        }
    }

    proptest! {
        #[test]
        fn write_then_read_round_trips(
            nx in 1usize..10,
            ny in 1usize..10,
            k in 0usize..3,
            x in 0usize..16,
            y in 0usize..16,
            value in -1.0e6f32..1.0e6,
        ) {
            let l = layout(nx, ny, 3);
            let (x, y) = (x % l.nx_all(), y % l.ny_all());
            let mut grid = FieldGrid::new(l);
            grid[(k, x, y)] = value;
            prop_assert_eq!(grid.get(k, x, y), value);
            prop_assert_eq!(grid.as_slice().iter().filter(|&&v| v != 0.0).count(),
                            usize::from(value != 0.0));
        }
    }
}
