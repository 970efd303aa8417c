use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
};

use ordered_float::NotNan;
use three_d::egui::{Area, Color32, Context, FontId, Label, RichText, TextWrapMode};

use super::declare_id;

declare_id!(FPS_AREA, b"PerfArea");

/// Offset from the top left corner, below the header.
const AREA_POS: (f32, f32) = (12.0, 80.0);

/// Sliding window of recent frame durations.
pub(super) struct FrameData {
    frame_len_secs: VecDeque<NotNan<f64>>,
}

impl FrameData {
    const WINDOW_SIZE: usize = 1200;

    pub(super) fn new() -> Self {
        Self {
            frame_len_secs: VecDeque::with_capacity(Self::WINDOW_SIZE),
        }
    }

    /// Returns NaN if no frames recorded yet
    fn average_fps(&self) -> f64 {
        self.frame_len_secs.len() as f64 / *self.frame_len_secs.iter().copied().sum::<NotNan<f64>>()
    }

    /// Gets the 1% lows of FPS in the sliding window.
    /// Returns NaN with fewer than 100 frames.
    fn low_fps(&self) -> f64 {
        let data_amount = self.frame_len_secs.len() / 100;
        if data_amount == 0 {
            return f64::NAN;
        }

        // Min-heap of the longest frames seen so far
        let mut heap = BinaryHeap::with_capacity(data_amount + 1);
        for &time in &self.frame_len_secs {
            heap.push(Reverse(time));
            if heap.len() > data_amount {
                heap.pop();
            }
        }

        heap.len() as f64 / *heap.iter().map(|&x| x.0).sum::<NotNan<f64>>()
    }

    #[cfg(test)]
    pub(super) fn len(&self) -> usize {
        self.frame_len_secs.len()
    }

    pub(super) fn insert_frame_data(&mut self, frame_duration: NotNan<f64>) {
        if self.frame_len_secs.len() >= Self::WINDOW_SIZE {
            self.frame_len_secs.pop_front();
        }

        self.frame_len_secs.push_back(frame_duration);
    }

    fn summary(&self) -> Option<String> {
        let fps = self.average_fps();
        if !fps.is_finite() {
            return None;
        }

        let low = self.low_fps();
        Some(if low.is_finite() {
            format!("FPS: {fps:.0}\n1%L: {low:.0}")
        } else {
            format!("FPS: {fps:.0}")
        })
    }
}

pub(super) fn fps_area(ctx: &Context, frame_data: &FrameData) {
    let Some(summary) = frame_data.summary() else {
        return;
    };

    const BACKGROUND_COLOR: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 128);
    let text = RichText::new(summary)
        .background_color(BACKGROUND_COLOR)
        .color(Color32::WHITE)
        .font(FontId::monospace(11.0));

    Area::new(*FPS_AREA_ID)
        .constrain_to(ctx.screen_rect())
        .fixed_pos(AREA_POS)
        .interactable(false)
        .show(ctx, |ui| {
            ui.add(
                Label::new(text)
                    .wrap_mode(TextWrapMode::Extend)
                    .selectable(false),
            );
        });
}
