//! Font Cache
//!
//! Resolved fonts memoized per role and scale. Entries are created on first
//! request and dropped all at once when a watched setting changes. The cache
//! lives in a GPUI entity and announces every invalidation with [`FontsChanged`].

use crate::fonts::{FontStyle, resolve_font};
use crate::layout::WindowManager;
use crate::platform::Platform;
use crate::settings::{FontSettings, SettingChanged, SettingKey};
use crate::toolkit::{FontDescriptor, FontToolkit, ToolkitWeight};
use ahash::AHashMap;
use gpui::{App, Context, Entity, EventEmitter, Subscription};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// A resolved font and its metrics
pub struct FontData<T: FontToolkit> {
    /// What the font was resolved from
    pub descriptor: FontDescriptor<ToolkitWeight<T>>,
    pub font: T::Font,
    pub metrics: T::Metrics,
}

impl<T: FontToolkit> fmt::Debug for FontData<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontData")
            .field("descriptor", &self.descriptor)
            .field("font", &self.font)
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Emitted by [`FontCache`] after every invalidation
///
/// The cache is already empty when subscribers receive it, so fonts requested
/// from them reflect the new settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontsChanged;

/// Bit pattern of a scale factor, usable as a map key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ScaleKey(u32);

impl ScaleKey {
    fn new(scale: f32) -> Self {
        // 0.0 and -0.0 compare equal and must share an entry
        let scale = if scale == 0.0 { 0.0 } else { scale };
        Self(scale.to_bits())
    }
}

type Bucket<T> = AHashMap<ScaleKey, Rc<FontData<T>>>;

/// Font cache shared by the GUI subsystem
///
/// Held in an [`Entity`], so every lookup, setting change and notification
/// happens on the GUI thread that owns the application.
pub struct FontCache<T: FontToolkit> {
    toolkit: T,
    settings: Entity<FontSettings>,
    platform: Platform,
    /// One bucket per [`FontStyle`], indexed by [`FontStyle::index`]
    buckets: Vec<Bucket<T>>,
    windows: Option<Rc<dyn WindowManager>>,
    _subscriptions: Vec<Subscription>,
}

impl<T: FontToolkit> EventEmitter<FontsChanged> for FontCache<T> {}

impl<T: FontToolkit> FontCache<T> {
    /// Create an empty cache
    ///
    /// The cache does not react to setting changes until [`FontCache::initialize`].
    pub fn new(toolkit: T, settings: Entity<FontSettings>, platform: Platform) -> Self {
        Self {
            toolkit,
            settings,
            platform,
            buckets: (0..FontStyle::COUNT).map(|_| AHashMap::new()).collect(),
            windows: None,
            _subscriptions: Vec::new(),
        }
    }

    /// Subscribe to the watched settings
    ///
    /// A family or size change clears the cache and emits [`FontsChanged`].
    /// A boldness change first bumps the window manager's layout generation.
    /// Calling this again replaces the previous subscription.
    pub fn initialize(&mut self, windows: Rc<dyn WindowManager>, cx: &mut Context<Self>) {
        let subscription = cx.subscribe(
            &self.settings,
            |this, _settings, event: &SettingChanged, cx| {
                this.on_setting_changed(event.key, cx);
            },
        );

        self.windows = Some(windows);
        self._subscriptions = vec![subscription];
    }

    fn on_setting_changed(&mut self, key: SettingKey, cx: &mut Context<Self>) {
        match key {
            SettingKey::ChatFontFamily | SettingKey::ChatFontSize => {}
            SettingKey::BoldScale => {
                if let Some(windows) = &self.windows {
                    windows.bump_generation();
                }
            }
        }
        self.invalidate_because(key.path(), cx);
    }

    // ==================== Lookup ====================

    /// Font for `style` at `scale`
    pub fn get_font(&mut self, style: FontStyle, scale: f32, cx: &App) -> T::Font {
        self.font_data(style, scale, cx).font.clone()
    }

    /// Metrics of the font for `style` at `scale`
    pub fn get_metrics(&mut self, style: FontStyle, scale: f32, cx: &App) -> T::Metrics {
        self.font_data(style, scale, cx).metrics.clone()
    }

    /// Cached entry for `style` at `scale`, resolving it on first request
    ///
    /// Until the next invalidation every call returns the same entry.
    pub fn font_data(&mut self, style: FontStyle, scale: f32, cx: &App) -> Rc<FontData<T>> {
        let key = ScaleKey::new(scale);
        if let Some(data) = self.buckets[style.index()].get(&key) {
            return Rc::clone(data);
        }

        let data = Rc::new(self.create_font_data(style, scale, cx));
        self.buckets[style.index()].insert(key, Rc::clone(&data));
        data
    }

    fn create_font_data(&self, style: FontStyle, scale: f32, cx: &App) -> FontData<T> {
        let descriptor =
            resolve_font::<T::Weights>(style, scale, self.settings.read(cx), self.platform);
        let font = self.toolkit.create_font(&descriptor);
        let metrics = self.toolkit.metrics(&font, descriptor.size);

        debug!(
            style = %style,
            scale,
            family = %descriptor.family,
            size = descriptor.size,
            weight = ?descriptor.weight,
            italic = descriptor.italic,
            "Resolved font"
        );

        FontData {
            descriptor,
            font,
            metrics,
        }
    }

    // ==================== Invalidation ====================

    /// Drop every cached font and emit [`FontsChanged`]
    pub fn invalidate(&mut self, cx: &mut Context<Self>) {
        self.invalidate_because("manual", cx);
    }

    fn invalidate_because(&mut self, reason: &str, cx: &mut Context<Self>) {
        let dropped = self.len();
        for bucket in &mut self.buckets {
            bucket.clear();
        }

        info!(reason, dropped, "Font cache invalidated");
        cx.emit(FontsChanged);
        cx.notify();
    }

    /// Run `callback` after every invalidation of `cache`
    pub fn on_fonts_changed(
        cache: &Entity<Self>,
        cx: &mut App,
        mut callback: impl FnMut(Entity<Self>, &mut App) + 'static,
    ) -> Subscription {
        cx.subscribe(cache, move |cache, _: &FontsChanged, cx| callback(cache, cx))
    }

    // ==================== Accessors ====================

    /// Number of cached entries across all styles
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    /// Check if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `style` at `scale` is resolved
    pub fn contains(&self, style: FontStyle, scale: f32) -> bool {
        self.buckets[style.index()].contains_key(&ScaleKey::new(scale))
    }

    pub fn settings(&self) -> &Entity<FontSettings> {
        &self.settings
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl<T: FontToolkit> fmt::Debug for FontCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontCache")
            .field("platform", &self.platform)
            .field("entries", &self.len())
            .field("initialized", &self.windows.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{LegacyScale, LegacyWeight, OpenTypeScale};
    use crate::layout::LayoutGeneration;
    use crate::settings::AppearanceConfig;
    use crate::toolkit::HeadlessToolkit;
    use gpui::{AppContext as _, FontWeight, TestAppContext};
    use std::cell::{Cell, RefCell};

    type TestCache = FontCache<HeadlessToolkit<OpenTypeScale>>;

    fn settings(cx: &mut TestAppContext) -> Entity<FontSettings> {
        let config = AppearanceConfig {
            current_font_size: Some(12),
            ..Default::default()
        };
        cx.new(|_| FontSettings::from_config(Platform::Other, &config).expect("valid config"))
    }

    fn initialized_cache(
        cx: &mut TestAppContext,
    ) -> (Entity<TestCache>, Entity<FontSettings>, Rc<LayoutGeneration>) {
        let settings = settings(cx);
        let windows = Rc::new(LayoutGeneration::new());
        let cache = cx.new(|cx| {
            let mut cache = FontCache::new(HeadlessToolkit::new(), settings.clone(), Platform::Other);
            cache.initialize(windows.clone(), cx);
            cache
        });
        (cache, settings, windows)
    }

    fn font<S: crate::fonts::WeightScale>(
        cache: &Entity<FontCache<HeadlessToolkit<S>>>,
        style: FontStyle,
        scale: f32,
        cx: &mut TestAppContext,
    ) -> FontDescriptor<S::Weight> {
        cache.update(cx, |cache, cx| cache.get_font(style, scale, cx))
    }

    fn data(
        cache: &Entity<TestCache>,
        style: FontStyle,
        scale: f32,
        cx: &mut TestAppContext,
    ) -> Rc<FontData<HeadlessToolkit<OpenTypeScale>>> {
        cache.update(cx, |cache, cx| cache.font_data(style, scale, cx))
    }

    fn cached(cache: &Entity<TestCache>, cx: &mut TestAppContext) -> usize {
        cache.read_with(cx, |cache, _| cache.len())
    }

    fn count_broadcasts(
        cache: &Entity<TestCache>,
        cx: &mut TestAppContext,
    ) -> (Rc<Cell<usize>>, Subscription) {
        let notified = Rc::new(Cell::new(0));
        let subscription = cx.update(|cx| {
            let notified = notified.clone();
            FontCache::on_fonts_changed(cache, cx, move |_, _| notified.set(notified.get() + 1))
        });
        (notified, subscription)
    }

    /// Window manager that logs each bump
    struct RecordingWindows {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl WindowManager for RecordingWindows {
        fn bump_generation(&self) {
            self.log.borrow_mut().push("bump".to_string());
        }
    }

    #[gpui::test]
    fn test_repeated_lookup_hits_cache(cx: &mut TestAppContext) {
        let (cache, _settings, _windows) = initialized_cache(cx);

        let first = data(&cache, FontStyle::ChatMedium, 1.0, cx);
        let second = data(&cache, FontStyle::ChatMedium, 1.0, cx);

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.read_with(cx, |cache, _| cache.toolkit().fonts_created()), 1);
        assert_eq!(font(&cache, FontStyle::ChatMedium, 1.0, cx), first.font);
    }

    #[gpui::test]
    fn test_font_and_metrics_share_one_entry(cx: &mut TestAppContext) {
        let (cache, _settings, _windows) = initialized_cache(cx);

        let font = font(&cache, FontStyle::UiTabs, 1.5, cx);
        let metrics = cache.update(cx, |cache, cx| cache.get_metrics(FontStyle::UiTabs, 1.5, cx));

        cache.read_with(cx, |cache, _| {
            assert_eq!(cache.toolkit().fonts_created(), 1);
            assert_eq!(cache.len(), 1);
            assert_eq!(metrics, cache.toolkit().metrics(&font, font.size));
        });
    }

    #[gpui::test]
    fn test_chat_small_at_base_twelve(cx: &mut TestAppContext) {
        let (cache, _settings, _windows) = initialized_cache(cx);
        let font = font(&cache, FontStyle::ChatSmall, 1.0, cx);
        assert_eq!(font.size, 7);
        assert_eq!(font.family.as_str(), "Arial");
    }

    #[gpui::test]
    fn test_each_scale_and_style_gets_its_own_entry(cx: &mut TestAppContext) {
        let (cache, _settings, _windows) = initialized_cache(cx);

        let small = font(&cache, FontStyle::ChatMedium, 1.0, cx);
        let zoomed = font(&cache, FontStyle::ChatMedium, 2.0, cx);
        font(&cache, FontStyle::ChatLarge, 1.0, cx);

        assert_eq!(small.size, 12);
        assert_eq!(zoomed.size, 24);
        cache.read_with(cx, |cache, _| {
            assert_eq!(cache.len(), 3);
            assert!(cache.contains(FontStyle::ChatMedium, 2.0));
            assert!(!cache.contains(FontStyle::ChatLarge, 2.0));
        });
    }

    #[gpui::test]
    fn test_signed_zero_scales_share_an_entry(cx: &mut TestAppContext) {
        let (cache, _settings, _windows) = initialized_cache(cx);
        let positive = data(&cache, FontStyle::Tiny, 0.0, cx);
        let negative = data(&cache, FontStyle::Tiny, -0.0, cx);
        assert!(Rc::ptr_eq(&positive, &negative));
    }

    #[gpui::test]
    fn test_family_change_reaches_cached_entries(cx: &mut TestAppContext) {
        let (cache, settings, windows) = initialized_cache(cx);
        assert_eq!(font(&cache, FontStyle::ChatMedium, 1.0, cx).family.as_str(), "Arial");

        settings.update(cx, |settings, cx| settings.set_chat_font_family("Fira Sans", cx));

        assert_eq!(cached(&cache, cx), 0);
        assert_eq!(font(&cache, FontStyle::ChatMedium, 1.0, cx).family.as_str(), "Fira Sans");
        assert_eq!(windows.current(), 0);
    }

    #[gpui::test]
    fn test_size_change_reaches_cached_entries(cx: &mut TestAppContext) {
        let (cache, settings, windows) = initialized_cache(cx);
        assert_eq!(font(&cache, FontStyle::ChatLarge, 1.0, cx).size, 14);

        settings.update(cx, |settings, cx| settings.set_chat_font_size(20, cx));

        assert_eq!(font(&cache, FontStyle::ChatLarge, 1.0, cx).size, 24);
        assert_eq!(windows.current(), 0);
    }

    #[gpui::test]
    fn test_bold_change_bumps_generation(cx: &mut TestAppContext) {
        let (cache, settings, windows) = initialized_cache(cx);
        assert_eq!(
            font(&cache, FontStyle::ChatMediumBold, 1.0, cx).weight,
            FontWeight::SEMIBOLD
        );

        settings.update(cx, |settings, cx| settings.set_bold_scale(87, cx));

        assert_eq!(windows.current(), 1);
        assert_eq!(
            font(&cache, FontStyle::ChatMediumBold, 1.0, cx).weight,
            FontWeight::BLACK
        );
    }

    #[gpui::test]
    fn test_bold_change_orders_bump_clear_broadcast(cx: &mut TestAppContext) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let settings = settings(cx);
        let windows = Rc::new(RecordingWindows { log: log.clone() });
        let cache: Entity<TestCache> = cx.new(|cx| {
            let mut cache = FontCache::new(HeadlessToolkit::new(), settings.clone(), Platform::Other);
            cache.initialize(windows.clone(), cx);
            cache
        });

        let _listener = cx.update(|cx| {
            let log = log.clone();
            FontCache::on_fonts_changed(&cache, cx, move |cache, cx| {
                let cached = cache.read(cx).len();
                log.borrow_mut().push(format!("changed:{cached}"));
            })
        });

        font(&cache, FontStyle::ChatMediumBold, 1.0, cx);
        font(&cache, FontStyle::UiMedium, 1.0, cx);
        settings.update(cx, |settings, cx| settings.set_bold_scale(75, cx));

        assert_eq!(*log.borrow(), vec!["bump".to_string(), "changed:0".to_string()]);
    }

    #[gpui::test]
    fn test_generation_is_bumped_before_broadcast(cx: &mut TestAppContext) {
        let (cache, settings, windows) = initialized_cache(cx);
        let seen_generation = Rc::new(Cell::new(None));

        let _listener = cx.update(|cx| {
            let windows = windows.clone();
            let seen_generation = seen_generation.clone();
            FontCache::on_fonts_changed(&cache, cx, move |_, _| {
                seen_generation.set(Some(windows.current()))
            })
        });

        settings.update(cx, |settings, cx| settings.set_bold_scale(50, cx));

        assert_eq!(seen_generation.get(), Some(1));
    }

    #[gpui::test]
    fn test_invalidation_clears_every_style_and_scale(cx: &mut TestAppContext) {
        let (cache, settings, _windows) = initialized_cache(cx);
        for style in FontStyle::ALL {
            for scale in [0.5, 1.0, 1.25, 2.0] {
                font(&cache, style, scale, cx);
            }
        }
        assert_eq!(cached(&cache, cx), FontStyle::COUNT * 4);

        settings.update(cx, |settings, cx| settings.set_chat_font_size(15, cx));

        cache.read_with(cx, |cache, _| {
            assert!(cache.is_empty());
            for style in FontStyle::ALL {
                assert!(!cache.contains(style, 1.0), "{style}");
            }
        });
    }

    #[gpui::test]
    fn test_listener_can_refetch_during_broadcast(cx: &mut TestAppContext) {
        let (cache, settings, _windows) = initialized_cache(cx);
        let refetched = Rc::new(Cell::new(0));

        let _listener = cx.update(|cx| {
            let refetched = refetched.clone();
            FontCache::on_fonts_changed(&cache, cx, move |cache, cx| {
                let font =
                    cache.update(cx, |cache, cx| cache.get_font(FontStyle::ChatMedium, 1.0, cx));
                refetched.set(font.size);
            })
        });

        settings.update(cx, |settings, cx| settings.set_chat_font_size(18, cx));

        assert_eq!(refetched.get(), 18);
        assert_eq!(cached(&cache, cx), 1);
    }

    #[gpui::test]
    fn test_unchanged_setting_keeps_entries(cx: &mut TestAppContext) {
        let (cache, settings, _windows) = initialized_cache(cx);
        let (notified, _listener) = count_broadcasts(&cache, cx);

        font(&cache, FontStyle::ChatMedium, 1.0, cx);
        settings.update(cx, |settings, cx| settings.set_chat_font_size(12, cx));

        assert_eq!(cached(&cache, cx), 1);
        assert_eq!(notified.get(), 0);
    }

    #[gpui::test]
    fn test_uninitialized_cache_ignores_settings(cx: &mut TestAppContext) {
        let settings = settings(cx);
        let cache: Entity<TestCache> =
            cx.new(|_| FontCache::new(HeadlessToolkit::new(), settings.clone(), Platform::Other));
        font(&cache, FontStyle::ChatMedium, 1.0, cx);

        settings.update(cx, |settings, cx| settings.set_chat_font_family("Fira Sans", cx));

        assert_eq!(cached(&cache, cx), 1);
        assert_eq!(font(&cache, FontStyle::ChatMedium, 1.0, cx).family.as_str(), "Arial");
    }

    #[gpui::test]
    fn test_initialize_twice_notifies_once(cx: &mut TestAppContext) {
        let (cache, settings, windows) = initialized_cache(cx);
        cache.update(cx, |cache, cx| cache.initialize(windows.clone(), cx));
        let (notified, _listener) = count_broadcasts(&cache, cx);

        settings.update(cx, |settings, cx| settings.set_bold_scale(50, cx));

        assert_eq!(notified.get(), 1);
        assert_eq!(windows.current(), 1);
    }

    #[gpui::test]
    fn test_manual_invalidate(cx: &mut TestAppContext) {
        let (cache, _settings, windows) = initialized_cache(cx);
        let (notified, _listener) = count_broadcasts(&cache, cx);
        let first = data(&cache, FontStyle::UiMediumBold, 1.0, cx);

        cache.update(cx, |cache, cx| cache.invalidate(cx));
        let second = data(&cache, FontStyle::UiMediumBold, 1.0, cx);

        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(first.font, second.font);
        assert_eq!(cache.read_with(cx, |cache, _| cache.toolkit().fonts_created()), 2);
        assert_eq!(notified.get(), 1);
        assert_eq!(windows.current(), 0);
    }

    #[gpui::test]
    fn test_dropped_cache_stops_listening(cx: &mut TestAppContext) {
        let (cache, settings, windows) = initialized_cache(cx);
        drop(cache);
        cx.run_until_parked();

        settings.update(cx, |settings, cx| settings.set_bold_scale(12, cx));

        assert_eq!(windows.current(), 0);
    }

    #[gpui::test]
    fn test_legacy_toolkit_uses_raw_boldness(cx: &mut TestAppContext) {
        let settings = settings(cx);
        let cache: Entity<FontCache<HeadlessToolkit<LegacyScale>>> = cx.new(|cx| {
            let mut cache = FontCache::new(HeadlessToolkit::new(), settings.clone(), Platform::Other);
            cache.initialize(Rc::new(LayoutGeneration::new()), cx);
            cache
        });

        settings.update(cx, |settings, cx| settings.set_bold_scale(56, cx));

        assert_eq!(
            font(&cache, FontStyle::ChatMediumBold, 1.0, cx).weight,
            LegacyWeight(56)
        );
        assert_eq!(
            font(&cache, FontStyle::UiMediumBold, 1.0, cx).weight,
            LegacyWeight::BOLD
        );
    }
}
