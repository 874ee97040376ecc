//! Journal Page Component
//!
//! Date picker, entry form, the day's table, and the export / clear-all
//! actions, wired to a localStorage-backed [`JournalStore`].

use leptos::prelude::*;

use crate::components::{ClearAllButton, EntryForm, EntryTable};
use crate::context::{use_app_context, Severity};
use crate::download::download_text;
use crate::journal::{JournalStore, EXPORT_FILENAME, EXPORT_MIME};
use crate::models::{DayKey, EntryDraft, FoodEntry};
use crate::storage::LocalStorage;

fn store() -> JournalStore<LocalStorage> {
    JournalStore::new(LocalStorage)
}

/// Today's date key from the browser clock, UTC, `YYYY-MM-DD`.
fn today_key() -> DayKey {
    let iso = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default();
    let date = iso.split('T').next().unwrap_or_default();
    DayKey::parse(date).unwrap_or_else(|| DayKey::parse("1970-01-01").expect("static key"))
}

#[component]
pub fn JournalPage() -> impl IntoView {
    let ctx = use_app_context();

    let (selected_day, set_selected_day) = signal(today_key());
    let (entries, set_entries) = signal(Vec::<FoodEntry>::new());

    // Reload the list whenever the selected date changes.
    Effect::new(move |_| {
        let day = selected_day.get();
        let load = store().load_day(&day);
        if load.malformed {
            ctx.notify(
                Severity::Destructive,
                format!("Stored entries for {} could not be read", day),
            );
        }
        set_entries.set(load.entries);
    });

    let add_entry = move |draft: EntryDraft| match store().add_entry(&selected_day.get(), &draft) {
        Ok(entry) => {
            set_entries.update(|list| list.push(entry));
            ctx.notify(Severity::Info, "Entry added successfully");
            true
        }
        Err(err) => {
            ctx.notify(Severity::Destructive, err.to_string());
            false
        }
    };

    let delete_entry = move |id: i64| {
        store().delete_entry(&selected_day.get(), id);
        set_entries.update(|list| list.retain(|e| e.id != id));
        ctx.notify(Severity::Info, "Entry deleted");
    };

    let export = move |_| match store().export_csv() {
        Ok(csv) => match download_text(EXPORT_FILENAME, EXPORT_MIME, &csv) {
            Ok(()) => ctx.notify(Severity::Info, "Export complete"),
            Err(err) => {
                web_sys::console::error_1(&format!("[journal] export failed: {}", err).into());
                ctx.notify(Severity::Destructive, "Export failed");
            }
        },
        Err(err) => ctx.notify(Severity::Destructive, err.to_string()),
    };

    let clear_all = move |_: ()| {
        store().clear_all();
        set_entries.set(Vec::new());
        ctx.notify(Severity::Destructive, "Database cleared");
    };

    view! {
        <section class="journal-page">
            <header class="journal-header">
                <h1>"Food Journal"</h1>
                <div class="journal-actions">
                    <button class="export-btn" on:click=export>"Export"</button>
                    <ClearAllButton on_confirm=clear_all />
                </div>
            </header>
            <p class="journal-subtitle">"Track your daily nutrition"</p>

            <input
                type="date"
                class="journal-date"
                prop:value=move || selected_day.get().to_string()
                on:change=move |ev| {
                    if let Some(day) = DayKey::parse(&event_target_value(&ev)) {
                        set_selected_day.set(day);
                    }
                }
            />

            <EntryForm on_add=add_entry />

            <h2>"Today's Entries"</h2>
            <EntryTable entries=entries on_delete=delete_entry />

            <footer class="journal-about">
                <h3>"About Food Journal"</h3>
                <p>
                    "Entries live in your browser's local storage. Export them "
                    "to CSV regularly and keep long-term records in a spreadsheet."
                </p>
            </footer>
        </section>
    }
}
