use std::io::Cursor;

use anyhow::{Context, Result};
use docx_rs::{
    read_docx, AlignmentType, BreakType, Paragraph, Run, Table, TableCell, TableRow, WidthType,
};

use crate::questions::CanonicalQuestion;

// Column and indent sizes in twips (1 inch = 1440).
const QUESTION_COL_WIDTH: usize = 7920; // 5.5"
const MARKS_COL_WIDTH: usize = 1440; // 1"
const OPTION_INDENT: i32 = 720; // 0.5"

/// Marks label appended to every question. A fixed constant, not derived
/// from input; the input schema carries no marks field.
const MARKS_LABEL: &str = "[5]";

/// Appends a "Questions" section to the template and returns the mutated
/// document as bytes.
///
/// The template bytes are loaded into a fresh document model on every call;
/// nothing is cached across calls and the input slice is left untouched.
/// Any failure aborts the whole call, so no partial document ever escapes.
pub fn append_questions(template: &[u8], questions: &[CanonicalQuestion]) -> Result<Vec<u8>> {
    let mut docx =
        read_docx(template).context("template is not a readable .docx package")?;

    // Separator between template content and the generated section.
    docx = docx.add_paragraph(
        Paragraph::new().add_run(Run::new().add_break(BreakType::TextWrapping)),
    );
    docx = docx.add_paragraph(
        Paragraph::new()
            .style("Heading1")
            .add_run(Run::new().add_text("Questions")),
    );

    for (idx, question) in questions.iter().enumerate() {
        let number = idx + 1;

        let mut question_cell = TableCell::new()
            .width(QUESTION_COL_WIDTH, WidthType::Dxa)
            .add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text(format!("{}. ", number)).bold())
                    .add_run(Run::new().add_text(question.text.as_str())),
            );
        for (opt_idx, option) in question.options.iter().enumerate() {
            question_cell = question_cell.add_paragraph(
                Paragraph::new()
                    .indent(Some(OPTION_INDENT), None, None, None)
                    .add_run(Run::new().add_text(format!("{}. {}", opt_idx + 1, option))),
            );
        }

        let marks_cell = TableCell::new()
            .width(MARKS_COL_WIDTH, WidthType::Dxa)
            .add_paragraph(
                Paragraph::new()
                    .align(AlignmentType::Right)
                    .add_run(Run::new().add_text(MARKS_LABEL).bold()),
            );

        let table = Table::new(vec![TableRow::new(vec![question_cell, marks_cell])])
            .set_grid(vec![QUESTION_COL_WIDTH, MARKS_COL_WIDTH]);
        docx = docx.add_table(table);

        // Visual spacing before the next question's table.
        docx = docx.add_paragraph(Paragraph::new());
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .context("failed to package generated document")?;
    Ok(buf.into_inner())
}
