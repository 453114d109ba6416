use domain_crm::model::entity::{AirConditioner, WorkItem};
use serde::{Deserialize, Serialize};

use crate::model::entity::Photo;

/// 写真と、そこから解決できた関連マスター情報
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PhotoView {
    pub photo: Photo,
    pub air_conditioner: Option<AirConditioner>,
    pub work_item: Option<WorkItem>,
}

/// 施工前後の写真ペア
///
/// PDF ギャラリーで横並び表示する単位。どちらか一方だけでもペアになる。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PhotoPair {
    pub before: Option<PhotoView>,
    pub after: Option<PhotoView>,
}

impl PhotoPair {
    /// before / after のリストを先頭から突き合わせてペア化する。
    /// 枚数が揃わない分は片側 None のペアになる。
    pub fn pair_up(before: Vec<PhotoView>, after: Vec<PhotoView>) -> Vec<PhotoPair> {
        let len = before.len().max(after.len());
        let mut before = before.into_iter().map(Some).collect::<Vec<_>>();
        let mut after = after.into_iter().map(Some).collect::<Vec<_>>();
        before.resize_with(len, || None);
        after.resize_with(len, || None);
        before
            .into_iter()
            .zip(after)
            .map(|(before, after)| PhotoPair { before, after })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: i32) -> PhotoView {
        PhotoView {
            photo: Photo {
                id,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn pair_up_zips_to_the_longer_side() {
        let pairs = PhotoPair::pair_up(vec![view(1), view(2), view(3)], vec![view(4)]);
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].before.as_ref().unwrap().photo.id, 1);
        assert_eq!(pairs[0].after.as_ref().unwrap().photo.id, 4);
        assert!(pairs[1].after.is_none());
        assert!(pairs[2].after.is_none());
    }

    #[test]
    fn pair_up_of_nothing_is_empty() {
        assert!(PhotoPair::pair_up(vec![], vec![]).is_empty());
    }
}
