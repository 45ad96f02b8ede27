#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;
use std::sync::OnceLock;

static HAS_AVX2: OnceLock<bool> = OnceLock::new();

#[inline]
fn has_avx2() -> bool {
    *HAS_AVX2.get_or_init(|| {
        #[cfg(target_arch = "x86_64")]
        {
            is_x86_feature_detected!("avx2")
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            false
        }
    })
}

/// Returns true when every byte is in `[A-Za-z]`.
///
/// Setting bit 5 folds upper case onto lower case, and only bytes from
/// `A..=Z` or `a..=z` land in `a..=z` afterwards. Bytes >= 128 compare as
/// negative and fail the lower bound.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[inline]
pub unsafe fn all_letters_avx2(data: &[u8]) -> bool {
    let case_bit = _mm256_set1_epi8(0x20);
    let lower_bound = _mm256_set1_epi8((b'a' - 1) as i8);
    let upper_bound = _mm256_set1_epi8((b'z' + 1) as i8);

    let chunks = data.chunks_exact(32);
    let remainder = chunks.remainder();

    for chunk in chunks {
        let chunk_ptr = chunk.as_ptr() as *const __m256i;
        let vector = _mm256_loadu_si256(chunk_ptr);
        let folded = _mm256_or_si256(vector, case_bit);
        let above = _mm256_cmpgt_epi8(folded, lower_bound);
        let below = _mm256_cmpgt_epi8(upper_bound, folded);
        let letters = _mm256_and_si256(above, below);
        if _mm256_movemask_epi8(letters) != -1 {
            return false;
        }
    }

    remainder.iter().all(u8::is_ascii_alphabetic)
}

#[inline]
pub fn all_letters(data: &[u8]) -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        if has_avx2() {
            return unsafe { all_letters_avx2(data) };
        }
    }

    data.iter().all(u8::is_ascii_alphabetic)
}

/// Counts `\n` and `\r` bytes.
#[inline]
pub fn count_terminators(data: &[u8]) -> usize {
    memchr::memchr2_iter(b'\n', b'\r', data).count()
}

/// Position of the first space or line terminator.
#[inline]
pub fn find_token_end(data: &[u8]) -> Option<usize> {
    memchr::memchr3(b' ', b'\n', b'\r', data)
}
