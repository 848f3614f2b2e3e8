//! Line-oriented questionnaire: digits pick an option, `n`/`p` navigate, `q` quits.

use crate::render::render_results;
use life_batteries::error::AppError;
use life_batteries::workflows::assessment::{
    AssessmentResults, AssessmentSession, CheckpointView, Participant, QuestionOrdering,
    QuestionView, ResultsNotifier, SessionStep,
};
use std::io::{BufRead, Write};

enum Command {
    Choose(usize),
    Next,
    Previous,
    Quit,
    Unknown,
}

fn parse_command(line: &str) -> Command {
    match line.trim().to_ascii_lowercase().as_str() {
        "" | "n" => Command::Next,
        "p" => Command::Previous,
        "q" => Command::Quit,
        other => other
            .parse::<usize>()
            .ok()
            .filter(|choice| *choice > 0)
            .map(Command::Choose)
            .unwrap_or(Command::Unknown),
    }
}

pub(crate) struct Terminal<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Drive a session to its results. `Ok(None)` when the participant quits or input ends.
    pub(crate) fn run<O, N>(
        &mut self,
        session: &mut AssessmentSession<O, N>,
    ) -> Result<Option<AssessmentResults>, AppError>
    where
        O: QuestionOrdering + 'static,
        N: ResultsNotifier + 'static,
    {
        writeln!(self.output, "Découvre l'état de tes 7 batteries de vie.")?;
        let Some(participant) = self.intake(session)? else {
            return Ok(None);
        };

        loop {
            match session.step() {
                SessionStep::Question(view) => {
                    self.show_question(&view)?;
                    let Some(line) = self.read_line("> ")? else {
                        return Ok(None);
                    };
                    let outcome = match parse_command(&line) {
                        Command::Choose(choice) => match view.question.options.get(choice - 1) {
                            Some(option) => session
                                .select(option.points)
                                .and_then(|_| session.next()),
                            None => {
                                writeln!(self.output, "Choix invalide.")?;
                                continue;
                            }
                        },
                        Command::Next => session.next(),
                        Command::Previous => session.previous(),
                        Command::Quit => return Ok(None),
                        Command::Unknown => {
                            writeln!(self.output, "Tape un numéro, n, p ou q.")?;
                            continue;
                        }
                    };
                    if let Err(err) = outcome {
                        writeln!(self.output, "{err}")?;
                    }
                }
                SessionStep::Checkpoint(view) => {
                    self.show_checkpoint(&view)?;
                    let Some(line) = self.read_line("Entrée pour continuer > ")? else {
                        return Ok(None);
                    };
                    match parse_command(&line) {
                        Command::Previous => {
                            session.previous()?;
                        }
                        Command::Quit => return Ok(None),
                        _ => {
                            session.next()?;
                        }
                    }
                }
                SessionStep::Intro => {
                    let Some(line) = self.read_line("Entrée pour reprendre, q pour quitter > ")?
                    else {
                        return Ok(None);
                    };
                    if matches!(parse_command(&line), Command::Quit) {
                        return Ok(None);
                    }
                    session.begin(participant.clone())?;
                }
                SessionStep::Results(results) => {
                    render_results(&mut self.output, &results)?;
                    return Ok(Some(results));
                }
            }
        }
    }

    fn intake<O, N>(
        &mut self,
        session: &mut AssessmentSession<O, N>,
    ) -> Result<Option<Participant>, AppError>
    where
        O: QuestionOrdering + 'static,
        N: ResultsNotifier + 'static,
    {
        loop {
            let Some(first_name) = self.read_line("Prénom : ")? else {
                return Ok(None);
            };
            let Some(last_name) = self.read_line("Nom : ")? else {
                return Ok(None);
            };
            let Some(email) = self.read_line("Email : ")? else {
                return Ok(None);
            };
            let Some(phone) = self.read_line("Téléphone (optionnel) : ")? else {
                return Ok(None);
            };

            let participant = Participant {
                first_name,
                last_name,
                email,
                phone: Some(phone),
            };
            match session.begin(participant) {
                Ok(_) => return Ok(session.participant().cloned()),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }

    fn show_question(&mut self, view: &QuestionView) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Question {}/{} ({}%) | {} {}/{}",
            view.number,
            view.total,
            view.progress_percent,
            view.battery_label,
            view.battery_progress.position,
            view.battery_progress.total
        )?;
        writeln!(self.output, "{}", view.question.prompt)?;
        for (index, option) in view.question.options.iter().enumerate() {
            let marker = if view.selected == Some(option.points) {
                "*"
            } else {
                " "
            };
            writeln!(self.output, " {marker}{}. {}", index + 1, option.text)?;
            if !option.example.is_empty() {
                writeln!(self.output, "      {}", option.example)?;
            }
        }
        Ok(())
    }

    fn show_checkpoint(&mut self, view: &CheckpointView) -> Result<(), AppError> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", view.message)?;
        writeln!(
            self.output,
            "Batterie {} terminée ({}/{})",
            view.battery_label, view.completed_batteries, view.total_batteries
        )?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use life_batteries::workflows::assessment::{
        FixedOrdering, LogNotifier, Profile, QuestionCatalog, ScoringConfig,
    };
    use std::io::Cursor;
    use std::sync::Arc;

    fn session() -> AssessmentSession<FixedOrdering, LogNotifier> {
        let catalog = Arc::new(QuestionCatalog::standard());
        AssessmentSession::new(
            catalog.clone(),
            Arc::new(FixedOrdering::canonical(&catalog)),
            Arc::new(LogNotifier),
            ScoringConfig::default(),
        )
    }

    fn intake_lines() -> String {
        "Camille\nMartin\ncamille@example.com\n\n".to_string()
    }

    #[test]
    fn answering_every_question_prints_results() {
        let mut script = intake_lines();
        for question in 0..35 {
            script.push_str("1\n");
            if question % 5 == 4 && question < 34 {
                script.push('\n');
            }
        }

        let mut output = Vec::new();
        let results = Terminal::new(Cursor::new(script), &mut output)
            .run(&mut session())
            .expect("terminal run succeeds")
            .expect("results produced");

        assert_eq!(results.total_score, 210);
        assert_eq!(results.profile, Profile::OptimalVitality);
        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("Question 1/35"));
        assert!(text.contains("Batterie Physique terminée (1/7)"));
        assert!(text.contains("Résultats de Camille"));
    }

    #[test]
    fn invalid_intake_is_asked_again() {
        let script = "Camille\nMartin\nnot-an-email\n\nCamille\nMartin\ncamille@example.com\n\nq\n";
        let mut output = Vec::new();

        let results = Terminal::new(Cursor::new(script), &mut output)
            .run(&mut session())
            .expect("terminal run succeeds");

        assert!(results.is_none());
        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("not a valid e-mail address"));
        assert!(text.contains("Question 1/35"));
    }

    #[test]
    fn next_without_answer_is_refused() {
        let script = format!("{}n\n", intake_lines());
        let mut output = Vec::new();

        let results = Terminal::new(Cursor::new(script), &mut output)
            .run(&mut session())
            .expect("terminal run succeeds");

        assert!(results.is_none());
        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("must be answered before moving on"));
    }

    #[test]
    fn previous_on_second_question_shows_saved_choice() {
        let script = format!("{}3\np\nq\n", intake_lines());
        let mut output = Vec::new();

        Terminal::new(Cursor::new(script), &mut output)
            .run(&mut session())
            .expect("terminal run succeeds");

        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("Question 2/35"));
        assert!(text.contains(" *3. "));
    }

    #[test]
    fn parse_command_recognises_navigation() {
        assert!(matches!(parse_command("2"), Command::Choose(2)));
        assert!(matches!(parse_command(" P "), Command::Previous));
        assert!(matches!(parse_command(""), Command::Next));
        assert!(matches!(parse_command("0"), Command::Unknown));
        assert!(matches!(parse_command("maybe"), Command::Unknown));
    }
}
