//! Peak finding and peak widths analogous to `scipy.signal` peak APIs

/// Prominence result bundle for [`peak_prominences`].
#[derive(Debug, Clone, PartialEq)]
pub struct PeakProminences {
    /// Prominence value for each input peak index.
    pub prominences: Vec<f64>,
    /// Left base index for each peak.
    pub left_bases: Vec<usize>,
    /// Right base index for each peak.
    pub right_bases: Vec<usize>,
}

/// Width result bundle for [`peak_widths`].
#[derive(Debug, Clone, PartialEq)]
pub struct PeakWidths {
    /// Width of each peak at the evaluated height (in samples).
    pub widths: Vec<f64>,
    /// Height level used for each width.
    pub width_heights: Vec<f64>,
    /// Left interpolated intersection point (index domain).
    pub left_ips: Vec<f64>,
    /// Right interpolated intersection point (index domain).
    pub right_ips: Vec<f64>,
}

/// Indices of local maxima
///
/// A flat top counts once, at its middle sample (rounded down). Edges are
/// never peaks.
pub fn find_peaks(x: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if x.len() < 3 {
        return peaks;
    }

    let i_max = x.len() - 1;
    let mut i = 1;
    while i < i_max {
        if x[i - 1] < x[i] {
            let mut ahead = i + 1;
            while ahead < i_max && x[ahead] == x[i] {
                ahead += 1;
            }
            if x[ahead] < x[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
                continue;
            }
        }
        i += 1;
    }
    peaks
}

/// Compute peak prominences and base indices.
pub fn peak_prominences(x: &[f64], peaks: &[usize]) -> PeakProminences {
    let mut prominences = Vec::with_capacity(peaks.len());
    let mut left_bases = Vec::with_capacity(peaks.len());
    let mut right_bases = Vec::with_capacity(peaks.len());

    for &peak in peaks.iter().filter(|&&p| p < x.len()) {
        let peak_val = x[peak];

        let mut left_min = peak_val;
        let mut left_base = peak;
        for i in (0..peak).rev() {
            if x[i] > peak_val {
                break;
            }
            if x[i] < left_min {
                left_min = x[i];
                left_base = i;
            }
        }

        let mut right_min = peak_val;
        let mut right_base = peak;
        for (i, &v) in x.iter().enumerate().skip(peak + 1) {
            if v > peak_val {
                break;
            }
            if v < right_min {
                right_min = v;
                right_base = i;
            }
        }

        prominences.push(peak_val - left_min.max(right_min));
        left_bases.push(left_base);
        right_bases.push(right_base);
    }

    PeakProminences {
        prominences,
        left_bases,
        right_bases,
    }
}

/// Compute peak widths at `rel_height` of each peak's prominence.
///
/// `rel_height = 0.5` gives the full width at half maximum in samples.
pub fn peak_widths(x: &[f64], peaks: &[usize], rel_height: f64) -> PeakWidths {
    let prom = peak_prominences(x, peaks);
    let valid_peaks = peaks.iter().copied().filter(|&p| p < x.len());

    let mut result = PeakWidths {
        widths: Vec::with_capacity(prom.prominences.len()),
        width_heights: Vec::with_capacity(prom.prominences.len()),
        left_ips: Vec::with_capacity(prom.prominences.len()),
        right_ips: Vec::with_capacity(prom.prominences.len()),
    };

    for (i, peak) in valid_peaks.enumerate() {
        let height = x[peak] - prom.prominences[i] * rel_height;

        let mut l = peak;
        while prom.left_bases[i] < l && height < x[l] {
            l -= 1;
        }
        let mut left_ip = l as f64;
        if x[l] < height {
            left_ip += (height - x[l]) / (x[l + 1] - x[l]);
        }

        let mut r = peak;
        while r < prom.right_bases[i] && height < x[r] {
            r += 1;
        }
        let mut right_ip = r as f64;
        if x[r] < height {
            right_ip -= (height - x[r]) / (x[r - 1] - x[r]);
        }

        result.widths.push(right_ip - left_ip);
        result.width_heights.push(height);
        result.left_ips.push(left_ip);
        result.right_ips.push(right_ip);
    }

    result
}
