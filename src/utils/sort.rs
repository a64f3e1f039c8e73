use core::mem;

use num::Zero;

/// Sort a sparse vector stored as SoA (inds/vals) by index, ascending.
/// - Reorders vals accordingly
/// - Stable for equal indices
///
/// Small inputs use insertion sort; larger ones a 4-pass LSD radix sort on
/// the u32 key, O(n + 256) per pass.
pub fn sort_by_index<N: Copy + Zero>(inds: &mut [u32], vals: &mut [N]) {
    assert_eq!(inds.len(), vals.len());
    let n = inds.len();
    if n <= 1 {
        return;
    }
    if n <= 32 {
        insertion_sort(inds, vals);
        return;
    }

    let mut inds_tmp = vec![0u32; n];
    let mut vals_tmp = vec![N::zero(); n];

    let mut src_inds: &mut [u32] = inds;
    let mut src_vals: &mut [N] = vals;
    let mut dst_inds: &mut [u32] = &mut inds_tmp;
    let mut dst_vals: &mut [N] = &mut vals_tmp;

    for shift in [0u32, 8, 16, 24] {
        let mut count = [0usize; 256];
        for &k in src_inds.iter() {
            count[((k >> shift) & 0xFF) as usize] += 1;
        }

        let mut sum = 0usize;
        for c in count.iter_mut() {
            let tmp = *c;
            *c = sum;
            sum += tmp;
        }

        for idx in 0..n {
            let k = src_inds[idx];
            let bucket = ((k >> shift) & 0xFF) as usize;
            let pos = count[bucket];
            count[bucket] = pos + 1;
            dst_inds[pos] = k;
            dst_vals[pos] = src_vals[idx];
        }

        mem::swap(&mut src_inds, &mut dst_inds);
        mem::swap(&mut src_vals, &mut dst_vals);
    }
    // even number of passes: the sorted data is back in the caller's slices
}

fn insertion_sort<N: Copy>(inds: &mut [u32], vals: &mut [N]) {
    for i in 1..inds.len() {
        let mut j = i;
        while j > 0 && inds[j] < inds[j - 1] {
            inds.swap(j, j - 1);
            vals.swap(j, j - 1);
            j -= 1;
        }
    }
}
