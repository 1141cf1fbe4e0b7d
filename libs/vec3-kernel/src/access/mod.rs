//! Read/write access contract shared by every kernel operation.
//!
//! [`VectorSource`] reads three ordered components, [`VectorSink`] writes
//! them. Implementations exist for `glam` vectors, fixed arrays, `(x, y, z)`
//! tuples, `f64` slices and [`Slot`] / [`SlotMut`] windows into larger
//! buffers. `f32` representations are widened on read and narrowed on write.
//!
//! Slices and slots must hold at least three components (from their offset);
//! shorter buffers panic on the out-of-range index. Writes check the whole
//! range first, so a short buffer is never partially overwritten.

pub use glam::DVec3 as Vec3;

/// Three ordered components available for reading.
///
/// # Examples
/// ```
/// use vec3_kernel::VectorSource;
///
/// let buf = [1.0_f64, 2.0, 3.0, 4.0];
/// assert_eq!(buf[..].xyz(), (1.0, 2.0, 3.0));
/// assert_eq!((1.0_f64, 2.0, 3.0).y(), 2.0);
/// ```
pub trait VectorSource {
    /// First component.
    fn x(&self) -> f64;
    /// Second component.
    fn y(&self) -> f64;
    /// Third component.
    fn z(&self) -> f64;

    /// All three components in x, y, z order.
    #[inline]
    fn xyz(&self) -> (f64, f64, f64) {
        (self.x(), self.y(), self.z())
    }
}

/// Destination accepting three ordered components.
pub trait VectorSink {
    /// Overwrites the three components.
    fn set(&mut self, x: f64, y: f64, z: f64);
}

/// Writes `(x, y, z)` into `dest` and hands the sink back for chaining.
#[inline]
pub(crate) fn emit<D: VectorSink + ?Sized>(dest: &mut D, x: f64, y: f64, z: f64) -> &mut D {
    dest.set(x, y, z);
    dest
}

/// Copies any source into a [`Vec3`] value.
///
/// # Examples
/// ```
/// use vec3_kernel::access::to_vec3;
/// use vec3_kernel::Vec3;
///
/// assert_eq!(to_vec3([1.0, 2.0, 3.0]), Vec3::new(1.0, 2.0, 3.0));
/// ```
#[inline]
pub fn to_vec3<S: VectorSource>(v: S) -> Vec3 {
    let (x, y, z) = v.xyz();
    Vec3::new(x, y, z)
}

// =============================================================================
// REFERENCES
// =============================================================================

impl<T: VectorSource + ?Sized> VectorSource for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }
    #[inline]
    fn xyz(&self) -> (f64, f64, f64) {
        (**self).xyz()
    }
}

impl<T: VectorSource + ?Sized> VectorSource for &mut T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
    #[inline]
    fn z(&self) -> f64 {
        (**self).z()
    }
    #[inline]
    fn xyz(&self) -> (f64, f64, f64) {
        (**self).xyz()
    }
}

impl<T: VectorSink + ?Sized> VectorSink for &mut T {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        (**self).set(x, y, z);
    }
}

// =============================================================================
// VECTOR OBJECTS
// =============================================================================

impl VectorSource for Vec3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn z(&self) -> f64 {
        self.z
    }
}

impl VectorSink for Vec3 {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = Vec3::new(x, y, z);
    }
}

impl VectorSource for glam::Vec3 {
    #[inline]
    fn x(&self) -> f64 {
        f64::from(self.x)
    }
    #[inline]
    fn y(&self) -> f64 {
        f64::from(self.y)
    }
    #[inline]
    fn z(&self) -> f64 {
        f64::from(self.z)
    }
}

impl VectorSink for glam::Vec3 {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = glam::Vec3::new(x as f32, y as f32, z as f32);
    }
}

// =============================================================================
// DISCRETE SCALARS
// =============================================================================

impl VectorSource for (f64, f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
    #[inline]
    fn z(&self) -> f64 {
        self.2
    }
    #[inline]
    fn xyz(&self) -> (f64, f64, f64) {
        *self
    }
}

impl VectorSink for (f64, f64, f64) {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = (x, y, z);
    }
}

// =============================================================================
// BUFFERS
// =============================================================================

impl VectorSource for [f64; 3] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl VectorSink for [f64; 3] {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = [x, y, z];
    }
}

impl VectorSource for [f32; 3] {
    #[inline]
    fn x(&self) -> f64 {
        f64::from(self[0])
    }
    #[inline]
    fn y(&self) -> f64 {
        f64::from(self[1])
    }
    #[inline]
    fn z(&self) -> f64 {
        f64::from(self[2])
    }
}

impl VectorSink for [f32; 3] {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = [x as f32, y as f32, z as f32];
    }
}

impl VectorSource for [f64] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self[2]
    }
}

impl VectorSink for [f64] {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        self[..3].copy_from_slice(&[x, y, z]);
    }
}

/// Read-only window onto three consecutive components of a larger buffer.
///
/// # Examples
/// ```
/// use vec3_kernel::{metric, Slot};
///
/// // two packed points
/// let points = [0.0, 0.0, 0.0, 3.0, 4.0, 0.0];
/// let d = metric::distance(Slot::new(&points, 0), Slot::new(&points, 3));
/// assert_eq!(d, 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    buf: &'a [f64],
    offset: usize,
}

impl<'a> Slot<'a> {
    /// Views `buf[offset..offset + 3]`.
    pub fn new(buf: &'a [f64], offset: usize) -> Self {
        Self { buf, offset }
    }
}

impl VectorSource for Slot<'_> {
    #[inline]
    fn x(&self) -> f64 {
        self.buf[self.offset]
    }
    #[inline]
    fn y(&self) -> f64 {
        self.buf[self.offset + 1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self.buf[self.offset + 2]
    }
}

/// Writable window onto three consecutive components of a larger buffer.
#[derive(Debug)]
pub struct SlotMut<'a> {
    buf: &'a mut [f64],
    offset: usize,
}

impl<'a> SlotMut<'a> {
    /// Views `buf[offset..offset + 3]` for writing.
    pub fn new(buf: &'a mut [f64], offset: usize) -> Self {
        Self { buf, offset }
    }
}

impl VectorSource for SlotMut<'_> {
    #[inline]
    fn x(&self) -> f64 {
        self.buf[self.offset]
    }
    #[inline]
    fn y(&self) -> f64 {
        self.buf[self.offset + 1]
    }
    #[inline]
    fn z(&self) -> f64 {
        self.buf[self.offset + 2]
    }
}

impl VectorSink for SlotMut<'_> {
    #[inline]
    fn set(&mut self, x: f64, y: f64, z: f64) {
        self.buf[self.offset..self.offset + 3].copy_from_slice(&[x, y, z]);
    }
}
