use anyhow::Result;
use bank_manager::{AccountKind, Bank, Error};
use eframe::egui::{Color32, RichText};
use eframe::{egui, Frame, Storage};
use egui_extras::{Column, TableBuilder};
use rust_decimal::Decimal;

use config::{AccountType, Config, Input};

mod config;
mod form;

type Transaction = fn(&mut Bank, Decimal) -> Result<Decimal, Error>;

pub struct App {
    cfg: Config,
    input: Input,
    bank: Bank,
    warn: Result<()>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            cfg: Config::default(),
            input: Input::default(),
            bank: Bank::new(),
            warn: Ok(()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if let Err(e) = &self.warn {
            egui::TopBottomPanel::top("warn").show(ctx, |ui| {
                let warn = RichText::from(e.to_string()).color(Color32::RED);
                ui.label(warn);
            });
        }

        egui::TopBottomPanel::bottom("bottom").show(ctx, |ui| {
            ui.horizontal(|ui| {
                egui::widgets::global_dark_light_mode_switch(ui);
                if ui.button("Apply Interest to All").clicked() {
                    self.warn = self.apply_interest_all();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Bank Account Manager");
            self.account_form(ui);
            ui.separator();
            self.account_list(ui);
            self.transaction_controls(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.cfg);
    }
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.storage
            .and_then(|storage| eframe::get_value::<Config>(storage, eframe::APP_KEY))
            .map(|cfg| Self {
                cfg,
                ..Default::default()
            })
            .unwrap_or_default()
    }

    fn account_form(&mut self, ui: &mut egui::Ui) {
        let Config {
            account_type,
            rate_or_fee,
        } = &mut self.cfg;

        egui::Grid::new("account_form")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Name");
                ui.text_edit_singleline(&mut self.input.name);
                ui.end_row();

                ui.label("Initial amount");
                ui.text_edit_singleline(&mut self.input.initial_amount);
                ui.end_row();

                ui.label(account_type.parameter());
                ui.text_edit_singleline(rate_or_fee);
                ui.end_row();
            });

        ui.horizontal(|ui| {
            for t in AccountType::ALL {
                ui.radio_value(account_type, t, t.to_string());
            }
        });

        if ui.button("Add Account").clicked() {
            self.warn = self.add_account();
        }
    }

    fn account_list(&mut self, ui: &mut egui::Ui) {
        ui.label("Accounts:");

        let row_height = egui::TextStyle::Body.resolve(ui.style()).size * 1.5;
        let selected = self.bank.selected_index();
        let mut clicked = None;

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::remainder())
            .max_scroll_height(240.0)
            .body(|body| {
                body.rows(row_height, self.bank.len(), |mut row| {
                    let index = row.index();
                    if let Some(account) = self.bank.get(index) {
                        row.col(|ui| {
                            if ui
                                .selectable_label(selected == Some(index), account.describe())
                                .clicked()
                            {
                                clicked = Some(index);
                            }
                        });
                    }
                });
            });

        if let Some(index) = clicked {
            self.click_row(index);
        }
    }

    /// Selects the row, or clears the selection when the row is already
    /// selected.
    fn click_row(&mut self, index: usize) {
        if self.bank.selected_index() == Some(index) {
            self.bank.clear_selection();
        } else {
            self.bank.select(index);
        }
    }

    fn transaction_controls(&mut self, ui: &mut egui::Ui) {
        let Some((_, account)) = self.bank.selected() else {
            return;
        };
        let savings = matches!(account.kind(), AccountKind::Savings { .. });

        ui.separator();
        ui.label(format!("Selected: {}", account.describe()));
        ui.horizontal(|ui| {
            ui.label("Amount");
            ui.text_edit_singleline(&mut self.input.amount);
        });

        ui.horizontal(|ui| {
            if ui.button("Deposit").clicked() {
                self.warn = self.transact(Bank::deposit);
            }
            if ui.button("Withdraw").clicked() {
                self.warn = self.transact(Bank::withdraw);
            }
            if savings && ui.button("Apply Interest").clicked() {
                self.warn = self.bank.apply_interest().map(|_| ()).map_err(Into::into);
            }
        });
    }

    fn add_account(&mut self) -> Result<()> {
        let account = form::new_account(
            self.cfg.account_type,
            &self.input.name,
            &self.input.initial_amount,
            &self.cfg.rate_or_fee,
        )?;
        self.bank.open(account);
        self.input.name.clear();
        Ok(())
    }

    fn transact(&mut self, transaction: Transaction) -> Result<()> {
        let amount = form::parse_amount("Amount", &self.input.amount)?;
        transaction(&mut self.bank, amount)?;
        Ok(())
    }

    fn apply_interest_all(&mut self) -> Result<()> {
        self.bank.apply_interest_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn app_with(account_type: AccountType, name: &str, amount: &str, rate_or_fee: &str) -> App {
        let mut app = App::default();
        app.cfg.account_type = account_type;
        app.cfg.rate_or_fee = rate_or_fee.to_owned();
        app.input.name = name.to_owned();
        app.input.initial_amount = amount.to_owned();
        app.add_account().unwrap();
        app
    }

    #[test]
    fn add_account_appends_and_clears_name() {
        let mut app = app_with(AccountType::Savings, "Alice", "100", "0.05");
        assert!(app.input.name.is_empty());

        app.cfg.account_type = AccountType::Checking;
        app.cfg.rate_or_fee = "5".to_owned();
        app.input.name = "Bob".to_owned();
        app.add_account().unwrap();

        let lines: Vec<_> = app.bank.accounts().iter().map(|a| a.describe()).collect();
        assert_eq!(
            lines,
            [
                "[Savings] Alice | Balance: 100.00",
                "[Checking] Bob | Balance: 100.00"
            ]
        );
        assert!(app.bank.selected().is_none());
    }

    #[test]
    fn rejected_form_opens_nothing() {
        let mut app = App::default();
        assert!(app.add_account().is_err());
        assert!(app.bank.is_empty());
    }

    #[test]
    fn deposit_and_withdraw_on_selection() {
        let mut app = app_with(AccountType::Checking, "Bob", "100", "5");
        app.bank.select(0);

        app.input.amount = "94".to_owned();
        app.transact(Bank::withdraw).unwrap();
        assert_eq!(app.bank.get(0).map(|a| a.balance()), Some(d("1")));

        app.input.amount = "10.999".to_owned();
        app.transact(Bank::deposit).unwrap();
        assert_eq!(app.bank.get(0).map(|a| a.balance()), Some(d("11.99")));
    }

    #[test]
    fn overdraw_becomes_a_warning() {
        let mut app = app_with(AccountType::Savings, "Alice", "100", "0.05");
        app.bank.select(0);
        app.input.amount = "150".to_owned();

        let err = app.transact(Bank::withdraw).unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::InsufficientFunds {
                required: d("150"),
                available: d("100"),
            })
        );
        assert_eq!(app.bank.get(0).map(|a| a.balance()), Some(d("100")));
    }

    #[test]
    fn transaction_without_selection_is_refused() {
        let mut app = app_with(AccountType::Savings, "Alice", "100", "0.05");
        app.input.amount = "10".to_owned();
        let err = app.transact(Bank::deposit).unwrap_err();
        assert_eq!(err.downcast_ref::<Error>(), Some(&Error::NoSelection));
    }

    #[test]
    fn clicking_selected_row_clears_selection() {
        let mut app = app_with(AccountType::Savings, "Alice", "100", "0.05");
        app.input.name = "Carol".to_owned();
        app.add_account().unwrap();

        app.click_row(1);
        assert_eq!(app.bank.selected_index(), Some(1));
        app.click_row(0);
        assert_eq!(app.bank.selected_index(), Some(0));
        app.click_row(0);
        assert_eq!(app.bank.selected_index(), None);
    }

    #[test]
    fn interest_for_all() {
        let mut app = app_with(AccountType::Savings, "Alice", "100", "0.05");
        app.apply_interest_all().unwrap();
        assert_eq!(
            app.bank.get(0).map(|a| a.describe()),
            Some("[Savings] Alice | Balance: 105.00".to_owned())
        );
    }
}
