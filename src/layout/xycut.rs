//! Recursive X-Y cut page segmenter.
//!
//! Builds a [`PartitionNode`] tree over a page's words by alternating
//! [`vertical_cut`] and [`horizontal_cut`], each driven by a projection
//! profile over the bounding boxes on that axis, then flattens the tree's
//! leaves into [`TextBlock`]s. See `examples/scostello-pdf_oxide/src/pipeline/reading_order/xycut.rs`
//! for the builder-config shape this generalizes (that strategy splits on a
//! valley-density ratio; this one merges on an adaptive gap threshold
//! derived from the page's own font metrics instead).

use crate::layout::{TextBlock, Word};
use rust_decimal::Decimal;
use std::sync::Arc;

/// A node of the recursive partition tree: either a terminal leaf holding
/// the words assigned to that region, or an internal node holding the
/// children produced by the cut that subdivided it.
///
/// The sentinel empty node is `PartitionNode::Leaf(vec![])`, produced when
/// every word in a region turns out to be whitespace-only.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionNode {
    /// A terminal region. Empty only for the sentinel case.
    Leaf(Vec<Word>),
    /// A subdivided region; never holds zero children.
    Internal(Vec<PartitionNode>),
}

impl PartitionNode {
    /// Walk the tree depth-first, collecting every non-empty leaf's words
    /// in document order.
    fn collect_leaves(&self, out: &mut Vec<Vec<Word>>) {
        match self {
            PartitionNode::Leaf(words) if !words.is_empty() => out.push(words.clone()),
            PartitionNode::Leaf(_) => {}
            PartitionNode::Internal(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// A closure mapping a sample of decimals (letter widths or heights) to a
/// single adaptive threshold. Boxed behind `Arc` so [`SegmenterConfig`] can
/// be cheaply cloned and shared across pages processed on independent
/// threads (the core has no shared mutable state by contract).
pub type DominantFn = Arc<dyn Fn(&[Decimal]) -> Decimal + Send + Sync>;

/// Statistical mode of a sample, rounded to three decimal places. The
/// default dominant-font statistic for both width and height.
///
/// Ties are broken by the smallest value, so the result is deterministic
/// regardless of input order.
pub fn mode(samples: &[Decimal]) -> Decimal {
    if samples.is_empty() {
        return Decimal::ZERO;
    }

    let mut counts: Vec<(Decimal, usize)> = Vec::new();
    for &sample in samples {
        match counts.iter_mut().find(|(value, _)| *value == sample) {
            Some(entry) => entry.1 += 1,
            None => counts.push((sample, 1)),
        }
    }

    let mut best = counts[0];
    for &(value, count) in &counts[1..] {
        if count > best.1 || (count == best.1 && value < best.0) {
            best = (value, count);
        }
    }

    best.0.round_dp(3)
}

/// `1.5 × mode`, the default dominant-height statistic.
fn default_dom_height_fn(samples: &[Decimal]) -> Decimal {
    mode(samples) * Decimal::new(15, 1)
}

/// Configuration knobs for [`get_blocks_with_config`].
///
/// Mirrors the teacher's `XYCutStrategy` builder: start from
/// [`SegmenterConfig::default`] and chain `with_*` calls.
#[derive(Clone)]
pub struct SegmenterConfig {
    minimum_width: Decimal,
    dom_width_fn: DominantFn,
    dom_height_fn: DominantFn,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            minimum_width: Decimal::ZERO,
            dom_width_fn: Arc::new(mode),
            dom_height_fn: Arc::new(default_dom_height_fn),
        }
    }
}

impl SegmenterConfig {
    /// Equivalent to [`SegmenterConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress vertical cuts that would leave a band narrower than this.
    pub fn with_minimum_width(mut self, minimum_width: Decimal) -> Self {
        self.minimum_width = minimum_width;
        self
    }

    /// Override the horizontal-gap threshold function.
    pub fn with_dom_width_fn(
        mut self,
        f: impl Fn(&[Decimal]) -> Decimal + Send + Sync + 'static,
    ) -> Self {
        self.dom_width_fn = Arc::new(f);
        self
    }

    /// Override the vertical-gap threshold function.
    pub fn with_dom_height_fn(
        mut self,
        f: impl Fn(&[Decimal]) -> Decimal + Send + Sync + 'static,
    ) -> Self {
        self.dom_height_fn = Arc::new(f);
        self
    }

    /// Replace both threshold functions with fixed constants, bypassing
    /// font-metric sampling entirely.
    pub fn with_constant_thresholds(mut self, dom_width: Decimal, dom_height: Decimal) -> Self {
        self.dom_width_fn = Arc::new(move |_: &[Decimal]| dom_width);
        self.dom_height_fn = Arc::new(move |_: &[Decimal]| dom_height);
        self
    }
}

/// `GetBlocks(words)`: default configuration throughout.
pub fn get_blocks(words: Vec<Word>) -> Vec<TextBlock> {
    get_blocks_with_config(words, &SegmenterConfig::default())
}

/// `GetBlocks(words, minimumWidth)`: default font-metric functions.
pub fn get_blocks_with_minimum_width(words: Vec<Word>, minimum_width: Decimal) -> Vec<TextBlock> {
    let config = SegmenterConfig::default().with_minimum_width(minimum_width);
    get_blocks_with_config(words, &config)
}

/// `GetBlocks(words, minimumWidth, domWidth, domHeight)`: constant
/// thresholds, bypassing font-metric sampling.
pub fn get_blocks_with_constant_thresholds(
    words: Vec<Word>,
    minimum_width: Decimal,
    dom_width: Decimal,
    dom_height: Decimal,
) -> Vec<TextBlock> {
    let config = SegmenterConfig::default()
        .with_minimum_width(minimum_width)
        .with_constant_thresholds(dom_width, dom_height);
    get_blocks_with_config(words, &config)
}

/// Full form: an explicit [`SegmenterConfig`], covering the
/// function-valued `domWidthFn`/`domHeightFn` entry point.
pub fn get_blocks_with_config(words: Vec<Word>, config: &SegmenterConfig) -> Vec<TextBlock> {
    if words.is_empty() {
        return Vec::new();
    }

    let root = vertical_cut(words, config, 0);
    let mut leaves = Vec::new();
    root.collect_leaves(&mut leaves);
    leaves.into_iter().map(TextBlock::from_words).collect()
}

fn width_samples(words: &[Word]) -> Vec<Decimal> {
    words
        .iter()
        .flat_map(|w| w.letters.iter())
        .map(|l| l.glyph_rectangle.width().abs())
        .collect()
}

fn height_samples(words: &[Word]) -> Vec<Decimal> {
    words
        .iter()
        .flat_map(|w| w.letters.iter())
        .map(|l| l.glyph_rectangle.height().abs())
        .collect()
}

/// Build the 1-D projection profile of `[lo, hi]` intervals along one axis.
///
/// `words` must already be sorted ascending by `lo_of`. `min_width`, when
/// present, enables the "still too narrow, merge anyway" fallback used by
/// the vertical axis; the horizontal axis passes `None`.
///
/// The final interval is flushed unconditionally after the loop — this is
/// the spec's "last-word rule" expressed as a standard accumulate-then-flush
/// pass rather than a per-iteration special case.
fn build_projection_profile(
    words: &[Word],
    gap_threshold: Decimal,
    min_width: Option<Decimal>,
    lo_of: impl Fn(&Word) -> Decimal,
    hi_of: impl Fn(&Word) -> Decimal,
) -> Vec<(Decimal, Decimal)> {
    let mut profile = Vec::new();
    let mut lo = lo_of(&words[0]);
    let mut hi = hi_of(&words[0]);

    for word in &words[1..] {
        let w_lo = lo_of(word);
        let w_hi = hi_of(word);

        let overlaps = (w_lo >= lo && w_lo <= hi) || (w_hi >= lo && w_hi <= hi);
        if overlaps {
            if w_lo >= lo && w_lo <= hi && w_hi > hi {
                hi = w_hi;
            }
        } else if w_lo - hi <= gap_threshold {
            hi = w_hi;
        } else if min_width.map(|mw| hi - lo < mw).unwrap_or(false) {
            hi = w_hi;
        } else {
            profile.push((lo, hi));
            lo = w_lo;
            hi = w_hi;
        }
    }
    profile.push((lo, hi));

    profile
}

/// Assign each word to the first profile interval whose `[lo, hi]` fully
/// contains its projection, then return the claimed groups alongside any
/// words no interval claimed ("lost" words, salvaged by the caller).
fn partition_by_profile(
    words: Vec<Word>,
    profile: &[(Decimal, Decimal)],
    lo_of: impl Fn(&Word) -> Decimal,
    hi_of: impl Fn(&Word) -> Decimal,
) -> (Vec<Vec<Word>>, Vec<Word>) {
    let mut claimed = vec![false; words.len()];
    let mut groups: Vec<Vec<Word>> = Vec::with_capacity(profile.len());

    for &(lo, hi) in profile {
        let mut group = Vec::new();
        for (index, word) in words.iter().enumerate() {
            if claimed[index] {
                continue;
            }
            if lo_of(word) >= lo && hi_of(word) <= hi {
                claimed[index] = true;
                group.push(word.clone());
            }
        }
        if !group.is_empty() {
            groups.push(group);
        }
    }

    let lost = words
        .into_iter()
        .zip(claimed)
        .filter_map(|(word, was_claimed)| (!was_claimed).then_some(word))
        .collect();

    (groups, lost)
}

/// Split a region along the horizontal (`Left`/`Right`) axis, then recurse
/// each resulting column into [`horizontal_cut`].
fn vertical_cut(words: Vec<Word>, config: &SegmenterConfig, level: u32) -> PartitionNode {
    let mut survivors: Vec<Word> = words.into_iter().filter(|w| !w.is_whitespace()).collect();
    if survivors.is_empty() {
        return PartitionNode::Leaf(Vec::new());
    }
    survivors.sort_by(|a, b| a.bounding_box.left().cmp(&b.bounding_box.left()));

    if survivors.len() <= 1 {
        return PartitionNode::Leaf(survivors);
    }

    let leaf_left = survivors.iter().map(|w| w.bounding_box.left()).min().unwrap();
    let leaf_right = survivors.iter().map(|w| w.bounding_box.right()).max().unwrap();
    if leaf_right - leaf_left <= config.minimum_width {
        return PartitionNode::Leaf(survivors);
    }

    let dom_font_width = (config.dom_width_fn)(&width_samples(&survivors));

    let profile = build_projection_profile(
        &survivors,
        dom_font_width,
        Some(config.minimum_width),
        |w| w.bounding_box.left(),
        |w| w.bounding_box.right(),
    );
    let (groups, lost) = partition_by_profile(
        survivors,
        &profile,
        |w| w.bounding_box.left(),
        |w| w.bounding_box.right(),
    );

    let mut children: Vec<PartitionNode> = groups
        .into_iter()
        .map(|group| horizontal_cut(group, config, level))
        .collect();

    if !lost.is_empty() {
        log::warn!(
            "xycut: vertical cut salvaged {} word(s) no interval claimed",
            lost.len()
        );
        children.extend(lost.into_iter().map(|w| PartitionNode::Leaf(vec![w])));
    }

    log::trace!("xycut: vertical cut at level {level} produced {} children", children.len());
    PartitionNode::Internal(children)
}

/// Split a region along the vertical (`Bottom`/`Top`) axis, then recurse
/// each resulting row into [`vertical_cut`]. `level` guards against
/// infinite recursion when a group never splits: it is the sole
/// termination mechanism for this mutual recursion (spec design note).
fn horizontal_cut(words: Vec<Word>, config: &SegmenterConfig, mut level: u32) -> PartitionNode {
    let mut survivors: Vec<Word> = words.into_iter().filter(|w| !w.is_whitespace()).collect();
    if survivors.is_empty() {
        return PartitionNode::Leaf(Vec::new());
    }
    survivors.sort_by(|a, b| a.bounding_box.bottom().cmp(&b.bounding_box.bottom()));

    if survivors.len() <= 1 {
        return PartitionNode::Leaf(survivors);
    }

    let dom_font_height = (config.dom_height_fn)(&height_samples(&survivors));

    let profile = build_projection_profile(
        &survivors,
        dom_font_height,
        None,
        |w| w.bounding_box.bottom(),
        |w| w.bounding_box.top(),
    );

    if profile.len() == 1 {
        if level >= 1 {
            log::trace!("xycut: horizontal cut stalled at level {level}, stopping recursion");
            return PartitionNode::Leaf(survivors);
        }
        level += 1;
    }

    let (groups, lost) = partition_by_profile(
        survivors,
        &profile,
        |w| w.bounding_box.bottom(),
        |w| w.bounding_box.top(),
    );

    let mut children: Vec<PartitionNode> = groups
        .into_iter()
        .map(|group| vertical_cut(group, config, level))
        .collect();

    if !lost.is_empty() {
        log::warn!(
            "xycut: horizontal cut salvaged {} word(s) no interval claimed",
            lost.len()
        );
        children.extend(lost.into_iter().map(|w| PartitionNode::Leaf(vec![w])));
    }

    PartitionNode::Internal(children)
}
