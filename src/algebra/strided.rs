// Strided views of matrices stored in a flat slice.
//
// A view is described by an offset into the backing slice together with
// independent row and column strides, so that column major, row major,
// submatrix and reversed layouts are all handled the same way.  All
// layout checks happen once when a view is constructed.  Algorithms then
// address elements through `MatLoc` / `VecLoc`, which are plain index
// calculators into the shared backing slice.

use super::{ScalarT, ShapedMatrix, StridedLayoutError};

/// Location of a matrix operand within a backing slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatLoc {
    /// linear index of element (0,0)
    pub offset: usize,
    /// row stride
    pub rs: isize,
    /// column stride
    pub cs: isize,
}

/// Location of a vector operand within a backing slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VecLoc {
    /// linear index of element 0
    pub offset: usize,
    /// element stride
    pub inc: isize,
}

impl MatLoc {
    pub fn new(offset: usize, rs: isize, cs: isize) -> Self {
        Self { offset, rs, cs }
    }

    /// Linear index of element (i,j)
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> usize {
        (self.offset as isize + (i as isize) * self.rs + (j as isize) * self.cs) as usize
    }

    /// Location of the submatrix with top left corner (i,j)
    #[inline]
    pub fn sub(&self, i: usize, j: usize) -> MatLoc {
        MatLoc {
            offset: self.at(i, j),
            ..*self
        }
    }

    /// Row `i`, starting at column `j`
    #[inline]
    pub fn row(&self, i: usize, j: usize) -> VecLoc {
        VecLoc {
            offset: self.at(i, j),
            inc: self.cs,
        }
    }

    /// Column `j`, starting at row `i`
    #[inline]
    pub fn col(&self, i: usize, j: usize) -> VecLoc {
        VecLoc {
            offset: self.at(i, j),
            inc: self.rs,
        }
    }

    /// Same storage with rows and columns exchanged
    #[inline]
    pub fn transpose(&self) -> MatLoc {
        MatLoc {
            offset: self.offset,
            rs: self.cs,
            cs: self.rs,
        }
    }
}

impl VecLoc {
    pub fn new(offset: usize, inc: isize) -> Self {
        Self { offset, inc }
    }

    /// Linear index of element k
    #[inline]
    pub fn at(&self, k: usize) -> usize {
        (self.offset as isize + (k as isize) * self.inc) as usize
    }
}

/// Checks that an `m×n` view with the given offset and strides lies within
/// a slice of length `len` and that distinct elements do not share storage.
pub fn check_layout(
    len: usize,
    m: usize,
    n: usize,
    offset: usize,
    rs: isize,
    cs: isize,
) -> Result<(), StridedLayoutError> {
    if rs == 0 || cs == 0 {
        return Err(StridedLayoutError::ZeroStride);
    }
    if m == 0 || n == 0 {
        return Ok(());
    }

    // extreme linear indices are attained at the corners.  Any
    // overflow means the view cannot fit in an addressable slice.
    let oob = StridedLayoutError::OutOfBounds;
    let m_1 = isize::try_from(m - 1).map_err(|_| oob)?;
    let n_1 = isize::try_from(n - 1).map_err(|_| oob)?;
    let offset = isize::try_from(offset).map_err(|_| oob)?;
    let (mut lo, mut hi) = (offset, offset);
    for step in [m_1.checked_mul(rs), n_1.checked_mul(cs)] {
        let step = step.ok_or(oob)?;
        if step < 0 {
            lo = lo.checked_add(step).ok_or(oob)?;
        } else {
            hi = hi.checked_add(step).ok_or(oob)?;
        }
    }
    if lo < 0 || hi.unsigned_abs() >= len {
        return Err(oob);
    }

    // the shorter stride must sweep its whole dimension before
    // the longer stride takes a single step
    if m > 1 && n > 1 {
        let (a, b) = (rs.unsigned_abs(), cs.unsigned_abs());
        let sweep = if a <= b { a.checked_mul(m) } else { b.checked_mul(n) };
        let ok = match sweep {
            Some(sweep) => a.max(b) >= sweep,
            None => false,
        };
        if !ok {
            return Err(StridedLayoutError::Overlap);
        }
    }
    Ok(())
}

/// Checked mutable strided view of an `m×n` matrix
#[derive(Debug)]
pub struct StridedMatMut<'a, T> {
    data: &'a mut [T],
    loc: MatLoc,
    m: usize,
    n: usize,
}

impl<'a, T> StridedMatMut<'a, T>
where
    T: ScalarT,
{
    pub fn new(
        data: &'a mut [T],
        m: usize,
        n: usize,
        offset: usize,
        rs: isize,
        cs: isize,
    ) -> Result<Self, StridedLayoutError> {
        check_layout(data.len(), m, n, offset, rs, cs)?;
        Ok(Self {
            data,
            loc: MatLoc::new(offset, rs, cs),
            m,
            n,
        })
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        assert!(i < self.m && j < self.n);
        self.data[self.loc.at(i, j)]
    }

    pub fn loc(&self) -> MatLoc {
        self.loc
    }

    /// Backing slice together with the location of the view in it
    pub fn parts_mut(&mut self) -> (&mut [T], MatLoc) {
        (&mut *self.data, self.loc)
    }
}

impl<T> ShapedMatrix for StridedMatMut<'_, T> {
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
}
