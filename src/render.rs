//! XML emission for the layout model.
//!
//! Writes the fixed `ScrollView`/`LinearLayout` skeleton, one group block
//! per field, then the string-array resource blocks. Everything that came
//! from the schema (field names, labels, enum text) is escaped before it
//! lands in an attribute or text position.

use std::io::Write;

use crate::model::{FieldGroup, LayoutModel, StringArrayResource, Widget};

/// Escapes the five XML-significant characters.
fn escape(s: &str) -> String {
    let mut out: String = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn emit_widget<W: Write>(widget: &Widget, writer: &mut W) -> std::io::Result<()> {
    match widget {
        Widget::EditText { id, numeric: false } => writeln!(
            writer,
            "            <EditText android:id=\"@+id/{}\" android:layout_width=\"match_parent\" android:layout_height=\"wrap_content\" />",
            escape(id)
        ),
        Widget::EditText { id, numeric: true } => writeln!(
            writer,
            "            <EditText android:id=\"@+id/{}\" android:inputType=\"number\" android:layout_width=\"match_parent\" android:layout_height=\"wrap_content\" />",
            escape(id)
        ),
        Widget::CheckBox { id, label } => writeln!(
            writer,
            "            <CheckBox android:id=\"@+id/{}\" android:text=\"{}\" android:layout_width=\"wrap_content\" android:layout_height=\"wrap_content\" />",
            escape(id),
            escape(label)
        ),
        Widget::Spinner { id, entries } => writeln!(
            writer,
            "            <Spinner android:id=\"@+id/{}\" android:layout_width=\"match_parent\" android:layout_height=\"wrap_content\" android:entries=\"@array/{}\" />",
            escape(id),
            escape(entries)
        ),
        Widget::ListView { id } => writeln!(
            writer,
            "            <ListView android:id=\"@+id/{}\" android:layout_width=\"match_parent\" android:layout_height=\"wrap_content\" />",
            escape(id)
        ),
        Widget::Placeholder { field } => writeln!(
            writer,
            "            <!-- Object type for {} not fully implemented -->",
            escape(field)
        ),
    }
}

fn emit_group<W: Write>(group: &FieldGroup, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "        <LinearLayout")?;
    writeln!(writer, "            android:layout_width=\"match_parent\"")?;
    writeln!(writer, "            android:layout_height=\"match_parent\"")?;
    writeln!(writer, "            android:layout_marginVertical=\"8dp\"")?;
    writeln!(writer, "            android:orientation=\"vertical\">")?;
    writeln!(writer, "            <TextView")?;
    writeln!(writer, "                android:layout_width=\"wrap_content\"")?;
    writeln!(writer, "                android:layout_height=\"wrap_content\"")?;
    writeln!(writer, "                android:layout_marginBottom=\"4dp\"")?;
    writeln!(writer, "                android:text=\"{}\" />", escape(&group.label))?;
    for widget in &group.widgets {
        emit_widget(widget, writer)?;
    }
    writeln!(writer, "        </LinearLayout>")?;
    Ok(())
}

fn emit_resource<W: Write>(resource: &StringArrayResource, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "        <string-array name=\"{}\">", escape(&resource.name))?;
    for item in &resource.items {
        writeln!(writer, "            <item>{}</item>", escape(item))?;
    }
    writeln!(writer, "        </string-array>")?;
    Ok(())
}

/// Renders the model into a complete XML layout document.
pub fn render_to_writer<W: Write>(model: &LayoutModel, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "<?xml version=\"1.0\" encoding=\"utf-8\"?>")?;
    writeln!(
        writer,
        "<ScrollView xmlns:android=\"http://schemas.android.com/apk/res/android\""
    )?;
    writeln!(writer, "    android:layout_width=\"match_parent\"")?;
    writeln!(writer, "    android:layout_height=\"match_parent\"")?;
    writeln!(writer, "    android:padding=\"16dp\">")?;
    writeln!(writer, "    <LinearLayout")?;
    writeln!(writer, "        android:layout_width=\"match_parent\"")?;
    writeln!(writer, "        android:layout_height=\"match_parent\"")?;
    writeln!(writer, "        android:orientation=\"vertical\">")?;
    for group in &model.groups {
        emit_group(group, writer)?;
    }
    // Resources trail every widget group.
    for resource in &model.resources {
        emit_resource(resource, writer)?;
    }
    writeln!(writer, "    </LinearLayout>")?;
    writeln!(writer, "</ScrollView>")?;
    Ok(())
}
