use mmv_hal::{
    backend_test_suite, cross_backend_test_suite,
    test_suite::mmv::{test_mmv_scenario_mod3, test_mmv_scenario_mod15, test_mmv_scenario_mod31, test_module_new_rejects},
};

use crate::{MmvLane, MmvRef};

macro_rules! mmv_ref_suite {
    ($modname:ident, $modulus:expr, $dimension:expr) => {
        backend_test_suite! {
            mod $modname,
            backend = crate::MmvRef,
            modulus = $modulus,
            dimension = $dimension,
            tests = {
                test_mmv_copy => mmv_hal::test_suite::mmv::test_mmv_copy,
                test_mmv_zero => mmv_hal::test_suite::mmv::test_mmv_zero,
                test_mmv_compare => mmv_hal::test_suite::mmv::test_mmv_compare,
                test_mmv_compare_mod_q => mmv_hal::test_suite::mmv::test_mmv_compare_mod_q,
                test_mmv_add_inplace => mmv_hal::test_suite::mmv::test_mmv_add_inplace,
                test_mmv_mul_scalar_inplace => mmv_hal::test_suite::mmv::test_mmv_mul_scalar_inplace,
                test_mmv_negate_inplace => mmv_hal::test_suite::mmv::test_mmv_negate_inplace,
                test_mmv_reduce => mmv_hal::test_suite::mmv::test_mmv_reduce,
                test_mmv_operand_mismatch => mmv_hal::test_suite::mmv::test_mmv_operand_mismatch,
            }
        }
    };
}

macro_rules! mmv_cross_suite {
    ($modname:ident, $modulus:expr, $dimension:expr) => {
        cross_backend_test_suite! {
            mod $modname,
            backend_ref = crate::MmvLane,
            backend_test = crate::MmvRef,
            modulus = $modulus,
            dimension = $dimension,
            tests = {
                test_mmv_add_inplace_cross => mmv_hal::test_suite::mmv::test_mmv_add_inplace_cross,
                test_mmv_mul_scalar_inplace_cross => mmv_hal::test_suite::mmv::test_mmv_mul_scalar_inplace_cross,
                test_mmv_negate_reduce_cross => mmv_hal::test_suite::mmv::test_mmv_negate_reduce_cross,
                test_mmv_compare_cross => mmv_hal::test_suite::mmv::test_mmv_compare_cross,
            }
        }
    };
}

// Dimensions are chosen so the last word is only partially used.
mmv_ref_suite!(mmv_ref_p3, 3, 1001);
mmv_ref_suite!(mmv_ref_p7, 7, 1001);
mmv_ref_suite!(mmv_ref_p15, 15, 1001);
mmv_ref_suite!(mmv_ref_p31, 31, 1003);
mmv_ref_suite!(mmv_ref_p63, 63, 1003);
mmv_ref_suite!(mmv_ref_p127, 127, 1003);
mmv_ref_suite!(mmv_ref_p255, 255, 1003);
mmv_ref_suite!(mmv_ref_p65535, 65535, 1001);
mmv_ref_suite!(mmv_ref_p_u32_max, u32::MAX, 1001);

mmv_cross_suite!(mmv_cross_p3, 3, 1001);
mmv_cross_suite!(mmv_cross_p7, 7, 1001);
mmv_cross_suite!(mmv_cross_p15, 15, 1001);
mmv_cross_suite!(mmv_cross_p31, 31, 1003);
mmv_cross_suite!(mmv_cross_p63, 63, 1003);
mmv_cross_suite!(mmv_cross_p127, 127, 1003);
mmv_cross_suite!(mmv_cross_p255, 255, 1003);

backend_test_suite! {
    mod mmv_lane_p15,
    backend = crate::MmvLane,
    modulus = 15,
    dimension = 1001,
    tests = {
        test_mmv_compare_mod_q => mmv_hal::test_suite::mmv::test_mmv_compare_mod_q,
        test_mmv_add_inplace => mmv_hal::test_suite::mmv::test_mmv_add_inplace,
        test_mmv_mul_scalar_inplace => mmv_hal::test_suite::mmv::test_mmv_mul_scalar_inplace,
        test_mmv_negate_inplace => mmv_hal::test_suite::mmv::test_mmv_negate_inplace,
        test_mmv_reduce => mmv_hal::test_suite::mmv::test_mmv_reduce,
    }
}

#[test]
fn test_mmv_scenario_mod3_ref() {
    test_mmv_scenario_mod3::<MmvRef>();
}

#[test]
fn test_mmv_scenario_mod3_lane() {
    test_mmv_scenario_mod3::<MmvLane>();
}

#[test]
fn test_mmv_scenario_mod15_ref() {
    test_mmv_scenario_mod15::<MmvRef>();
}

#[test]
fn test_mmv_scenario_mod31_ref() {
    test_mmv_scenario_mod31::<MmvRef>();
}

#[test]
fn test_module_new_rejects_ref() {
    test_module_new_rejects::<MmvRef>();
}

#[test]
fn test_module_new_rejects_lane() {
    test_module_new_rejects::<MmvLane>();
}
