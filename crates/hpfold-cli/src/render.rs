use hpfold::core::models::fold::{Fold, FoldError};
use hpfold::core::models::sequence::HpSequence;

/// Draws a fold on a character grid at double resolution, so bonds get their own cells.
///
/// Residues are `H` (hydrophobic) or `P` (polar); a residue sharing its cell with another
/// one is drawn as `X`. The first residue is lowercase. Bonds are `-` and `|`.
pub fn render(fold: &Fold, sequence: &HpSequence) -> Result<String, FoldError> {
    if sequence.len() != fold.residue_count() {
        return Err(FoldError::SequenceLengthMismatch {
            turns: fold.len(),
            residues: sequence.len(),
        });
    }

    let bbox = fold.bounding_box();
    let cols = 2 * bbox.width() - 1;
    let rows = 2 * bbox.height() - 1;
    let mut grid = vec![vec![' '; cols]; rows];

    let cell = |x: i32, y: i32| -> (usize, usize) {
        (
            2 * (bbox.max.y - y) as usize,
            2 * (x - bbox.min.x) as usize,
        )
    };

    let positions = fold.positions();
    for pair in positions.windows(2) {
        let (r0, c0) = cell(pair[0].x, pair[0].y);
        let (r1, c1) = cell(pair[1].x, pair[1].y);
        grid[(r0 + r1) / 2][(c0 + c1) / 2] = if r0 == r1 { '-' } else { '|' };
    }

    // Drawn back to front so the chain start wins a shared cell.
    for (index, p) in positions.iter().enumerate().rev() {
        let symbol = if fold.overlaps_at_position(index)? > 0 {
            'X'
        } else if sequence.is_hydrophobic(index) {
            'H'
        } else {
            'P'
        };
        let (r, c) = cell(p.x, p.y);
        grid[r][c] = if index == 0 {
            symbol.to_ascii_lowercase()
        } else {
            symbol
        };
    }

    Ok(grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
