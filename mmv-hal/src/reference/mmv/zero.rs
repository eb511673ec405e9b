#[inline(always)]
pub fn mmv_zero(res: &mut [u64]) {
    res.fill(0);
}
