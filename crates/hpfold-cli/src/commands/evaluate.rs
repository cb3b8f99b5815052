use crate::cli::EvaluateArgs;
use crate::error::Result;
use crate::render::render;
use hpfold::core::models::direction::Direction;
use hpfold::core::models::fold::Fold;
use hpfold::core::models::sequence::HpSequence;
use tracing::info;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let sequence = HpSequence::from(args.sequence.as_str());
    let mut fold = Fold::new(Direction::parse_turns(&args.turns)?);
    info!(
        residues = sequence.len(),
        turns = fold.len(),
        "Evaluating fold."
    );

    let score = fold.evaluated_score(&sequence)?;
    println!("Sequence: {}", sequence);
    println!("Turns:    {}", Direction::format_turns(fold.directions()));
    println!(
        "Fitness:  {:.4} (contacts: {}, overlaps: {})",
        score.fitness, score.energy, score.overlaps
    );

    if !args.no_render {
        println!("\n{}", render(&fold, &sequence)?);
    }
    Ok(())
}
