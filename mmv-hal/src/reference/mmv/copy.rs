#[inline(always)]
pub fn mmv_copy(src: &[u64], dst: &mut [u64]) {
    #[cfg(debug_assertions)]
    {
        assert_eq!(src.len(), dst.len())
    }
    dst.copy_from_slice(src);
}
