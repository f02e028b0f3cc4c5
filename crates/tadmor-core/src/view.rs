//! Strided multi-field views for batched physics calls.
//!
//! Grid storage keeps one contiguous block per field. A batched call
//! covers a run of `ncell` consecutive cells starting at some offset in
//! field 0; the same run in field `k` starts `k * field_stride` elements
//! later. [`Fields`] and [`FieldsMut`] package that shape so physics code
//! can split the run into per-field slices without index arithmetic.

/// Read-only view of `ncell` cells in each of several strided fields.
#[derive(Clone, Copy, Debug)]
pub struct Fields<'a> {
    data: &'a [f32],
    ncell: usize,
    field_stride: usize,
}

impl<'a> Fields<'a> {
    /// Wrap `data`, whose element 0 is the first cell of field 0.
    ///
    /// # Panics
    ///
    /// Panics if `ncell > field_stride`.
    pub fn new(data: &'a [f32], ncell: usize, field_stride: usize) -> Self {
        assert!(
            ncell <= field_stride,
            "run of {ncell} cells exceeds field stride {field_stride}"
        );
        Self {
            data,
            ncell,
            field_stride,
        }
    }

    /// Number of cells in the run.
    pub fn ncell(&self) -> usize {
        self.ncell
    }

    /// Distance in elements between consecutive fields.
    pub fn field_stride(&self) -> usize {
        self.field_stride
    }

    /// The run for field `k`.
    ///
    /// # Panics
    ///
    /// Panics if field `k` extends past the end of the wrapped slice.
    pub fn field(&self, k: usize) -> &'a [f32] {
        let data = self.data;
        let start = k * self.field_stride;
        &data[start..start + self.ncell]
    }

    /// Split into `N` per-field runs.
    pub fn split<const N: usize>(&self) -> [&'a [f32]; N] {
        std::array::from_fn(|k| self.field(k))
    }
}

/// Mutable view of `ncell` cells in each of several strided fields.
#[derive(Debug)]
pub struct FieldsMut<'a> {
    data: &'a mut [f32],
    ncell: usize,
    field_stride: usize,
}

impl<'a> FieldsMut<'a> {
    /// Wrap `data`, whose element 0 is the first cell of field 0.
    ///
    /// # Panics
    ///
    /// Panics if `ncell > field_stride`.
    pub fn new(data: &'a mut [f32], ncell: usize, field_stride: usize) -> Self {
        assert!(
            ncell <= field_stride,
            "run of {ncell} cells exceeds field stride {field_stride}"
        );
        Self {
            data,
            ncell,
            field_stride,
        }
    }

    /// Number of cells in the run.
    pub fn ncell(&self) -> usize {
        self.ncell
    }

    /// Distance in elements between consecutive fields.
    pub fn field_stride(&self) -> usize {
        self.field_stride
    }

    /// The run for field `k`.
    pub fn field_mut(&mut self, k: usize) -> &mut [f32] {
        let start = k * self.field_stride;
        &mut self.data[start..start + self.ncell]
    }

    /// Split into `N` disjoint per-field runs.
    ///
    /// # Panics
    ///
    /// Panics if the wrapped slice is too short to hold `N` fields.
    pub fn split_mut<const N: usize>(self) -> [&'a mut [f32]; N] {
        let ncell = self.ncell;
        let stride = self.field_stride;
        let mut rest = self.data;
        std::array::from_fn(|_| {
            let taken = std::mem::take(&mut rest);
            let (head, tail) = taken.split_at_mut(stride.min(taken.len()));
            rest = tail;
            &mut head[..ncell]
        })
    }
}
